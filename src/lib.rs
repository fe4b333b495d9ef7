//! # Projectile Engine
//!
//! Trajectory and kinematics engine for physics-education displays.
//!
//! Produces point sequences for 2D projectile motion under gravity and
//! quadratic air resistance, the matching ideal (drag-free) closed-form
//! trajectory, and step-by-step kinematic derivations for the classic
//! "thrown ball" maximum-height problem. A rendering collaborator consumes
//! the sequences through an opaque viewport mapping.

// Re-export the main types and functions
pub use comparison::{compare, ComparisonSummary, DragComparison};
pub use integrator::{simulate_drag, simulate_ideal, SimulationState};
pub use kinematics::{solve_stopping_displacement, KinematicSolution};
pub use params::{PhysicsParameters, SimulationError};
pub use sampling::{sample_at_distances, RangeSample, SampleFlag};
pub use trajectory::{Trajectory, TrajectoryPoint};
pub use viewport::{project, LinearViewport, ViewportMapper};

// Module declarations
pub mod comparison;
mod constants;
pub mod integrator;
pub mod kinematics;
pub mod params;
pub mod sampling;
pub mod trajectory;
pub mod viewport;
