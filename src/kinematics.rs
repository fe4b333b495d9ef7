//! Closed-form kinematics for the "thrown ball" problem.
//!
//! Solves `v² = u² + 2as` for the displacement at which velocity reaches
//! zero and exposes the intermediate algebra as display-ready equation
//! strings, one per derivation step, the way the education scenes present
//! them.

use serde::Serialize;

use crate::params::SimulationError;

/// Result of a stopping-displacement derivation
#[derive(Debug, Clone, Serialize)]
pub struct KinematicSolution {
    /// Displacement at which velocity reaches zero, in meters
    pub displacement_m: f64,
    /// Time at which velocity reaches zero, in seconds
    pub stop_time_s: f64,
    /// Ordered display-ready equation strings for the derivation
    pub derivation: Vec<String>,
}

/// Solve for the displacement at which velocity reaches zero under constant
/// acceleration.
///
/// Given initial speed `u` and signed constant acceleration `a`, computes
/// `s = -u²/(2a)` along with the substitution steps. For the classic upward
/// throw (`u = 20`, `a = -9.8`) this yields `s ≈ 20.41 m`.
///
/// Fails with a domain error when `a = 0` (the projectile never stops) or
/// when either input is non-finite. Pure function, no side effects.
pub fn solve_stopping_displacement(
    u: f64,
    a: f64,
) -> Result<KinematicSolution, SimulationError> {
    if !u.is_finite() || !a.is_finite() {
        return Err(SimulationError::Domain(format!(
            "inputs must be finite, got u={}, a={}",
            u, a
        )));
    }
    if a == 0.0 {
        return Err(SimulationError::Domain(
            "acceleration must be non-zero for the velocity to reach zero".to_string(),
        ));
    }

    let u_squared = u * u;
    let two_a = 2.0 * a;
    let displacement_m = -u_squared / two_a;
    let stop_time_s = -u / a;

    let substitution = format!("0 = ({})^2 + 2({})s", u, a);
    let collected = if two_a < 0.0 {
        format!("0 = {} - {}s", u_squared, -two_a)
    } else {
        format!("0 = {} + {}s", u_squared, two_a)
    };
    let rearranged = format!("{}s = {}", -two_a, u_squared);
    let solved = format!(
        "s = {}/{} ≈ {:.2} m",
        u_squared, -two_a, displacement_m
    );

    Ok(KinematicSolution {
        displacement_m,
        stop_time_s,
        derivation: vec![
            "v^2 = u^2 + 2as".to_string(),
            substitution,
            collected,
            rearranged,
            solved,
        ],
    })
}
