/// Physical and numerical constants used by the trajectory engine

/// Gravitational acceleration used by the reference education scenarios
pub const CLASSROOM_GRAVITY_MPS2: f64 = 9.8;

/// Hard upper bound on integration steps per simulation.
///
/// The `y < 0` termination test never fires for degenerate inputs such as
/// zero gravity with a non-negative launch angle, so every integration loop
/// must bail out once this many steps have been taken.
pub const MAX_INTEGRATION_STEPS: usize = 1_000_000;

/// Multiple of the ideal flight time used to pre-size trajectory buffers.
///
/// Drag only shortens flight, so 2.5x the drag-free time of flight is a
/// generous capacity estimate.
pub const FLIGHT_TIME_SAFETY_FACTOR: f64 = 2.5;

/// Threshold below which a flight's range is treated as zero
pub const MIN_RANGE_THRESHOLD_M: f64 = 1e-9;

/// Smallest usable resampling interval in meters
pub const MIN_SAMPLE_INTERVAL_M: f64 = 0.1;
