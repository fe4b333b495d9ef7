//! Side-by-side comparison of ideal and drag-affected flight.

use serde::Serialize;

use crate::integrator::{simulate_drag, simulate_ideal};
use crate::params::{PhysicsParameters, SimulationError};
use crate::trajectory::Trajectory;

/// Headline numbers for how much drag costs the projectile
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub ideal_range_m: f64,
    pub drag_range_m: f64,
    pub range_reduction_pct: f64,
    pub ideal_apex_m: f64,
    pub drag_apex_m: f64,
    pub apex_reduction_pct: f64,
    pub ideal_flight_time_s: f64,
    pub drag_flight_time_s: f64,
}

/// Both trajectories for one scenario plus the reduction summary
#[derive(Debug, Clone)]
pub struct DragComparison {
    pub ideal: Trajectory,
    pub drag: Trajectory,
    pub summary: ComparisonSummary,
}

/// Run the drag and ideal generators on one parameter set and summarize
/// the difference.
pub fn compare(params: &PhysicsParameters) -> Result<DragComparison, SimulationError> {
    let ideal = simulate_ideal(params)?;
    let drag = simulate_drag(params)?;

    let ideal_apex_m = ideal.apex().map_or(0.0, |p| p.position.y);
    let drag_apex_m = drag.apex().map_or(0.0, |p| p.position.y);

    let summary = ComparisonSummary {
        ideal_range_m: ideal.range_m(),
        drag_range_m: drag.range_m(),
        range_reduction_pct: reduction_pct(ideal.range_m(), drag.range_m()),
        ideal_apex_m,
        drag_apex_m,
        apex_reduction_pct: reduction_pct(ideal_apex_m, drag_apex_m),
        ideal_flight_time_s: ideal.time_of_flight_s(),
        drag_flight_time_s: drag.time_of_flight_s(),
    };

    Ok(DragComparison {
        ideal,
        drag,
        summary,
    })
}

fn reduction_pct(ideal: f64, actual: f64) -> f64 {
    if ideal.abs() < 1e-12 {
        0.0
    } else {
        (ideal - actual) / ideal * 100.0
    }
}
