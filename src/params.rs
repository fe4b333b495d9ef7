//! Scenario parameters and the engine error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for trajectory and kinematics operations.
///
/// A bad parameter set is a caller bug, not a transient fault: errors are
/// returned synchronously and nothing is retried. No partial trajectories
/// are produced on failure.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Invalid or degenerate physical parameters
    #[error("invalid parameters: {0}")]
    Domain(String),

    /// The integration step cap was exceeded, meaning the configured
    /// scenario would never return to ground on its own
    #[error("simulation did not terminate within {steps} steps")]
    NonTermination { steps: usize },
}

/// Immutable configuration for one projectile scenario.
///
/// Supplied once at construction and never mutated. All quantities are SI:
/// meters, kilograms, seconds; the launch angle is in degrees above the
/// horizontal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsParameters {
    /// Launch speed in m/s
    pub initial_speed: f64,
    /// Launch angle above horizontal in degrees
    pub launch_angle: f64,
    /// Projectile mass in kg
    pub mass: f64,
    /// Gravitational acceleration in m/s² (downward-positive)
    pub gravity: f64,
    /// Quadratic drag scalar k in kg/m; drag force is k·v·|v|
    pub drag_coefficient: f64,
    /// Fixed integration step in seconds
    pub time_step: f64,
}

impl Default for PhysicsParameters {
    /// The reference classroom scenario: a 1 kg ball launched at 30 m/s and
    /// 45° with moderate quadratic drag.
    fn default() -> Self {
        Self {
            initial_speed: 30.0,
            launch_angle: 45.0,
            mass: 1.0,
            gravity: crate::constants::CLASSROOM_GRAVITY_MPS2,
            drag_coefficient: 0.05,
            time_step: 0.005,
        }
    }
}

impl PhysicsParameters {
    /// Launch velocity components (vx0, vy0) in m/s.
    pub fn launch_velocity(&self) -> (f64, f64) {
        let angle_rad = self.launch_angle.to_radians();
        (
            self.initial_speed * angle_rad.cos(),
            self.initial_speed * angle_rad.sin(),
        )
    }

    /// Check the parameter set against its physical domain.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("initial_speed", self.initial_speed),
            ("launch_angle", self.launch_angle),
            ("mass", self.mass),
            ("gravity", self.gravity),
            ("drag_coefficient", self.drag_coefficient),
            ("time_step", self.time_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::Domain(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.initial_speed < 0.0 {
            return Err(SimulationError::Domain(format!(
                "initial_speed must be non-negative, got {}",
                self.initial_speed
            )));
        }
        if self.mass <= 0.0 {
            return Err(SimulationError::Domain(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.gravity < 0.0 {
            return Err(SimulationError::Domain(format!(
                "gravity must be non-negative, got {}",
                self.gravity
            )));
        }
        if self.drag_coefficient < 0.0 {
            return Err(SimulationError::Domain(format!(
                "drag_coefficient must be non-negative, got {}",
                self.drag_coefficient
            )));
        }
        if self.time_step <= 0.0 {
            return Err(SimulationError::Domain(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        assert!(PhysicsParameters::default().validate().is_ok());
    }

    #[test]
    fn test_launch_velocity_components() {
        let params = PhysicsParameters {
            initial_speed: 30.0,
            launch_angle: 45.0,
            ..Default::default()
        };
        let (vx0, vy0) = params.launch_velocity();
        let expected = 30.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((vx0 - expected).abs() < 1e-12);
        assert!((vy0 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_time_step() {
        let params = PhysicsParameters {
            time_step: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SimulationError::Domain(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_fields() {
        let params = PhysicsParameters {
            initial_speed: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = PhysicsParameters {
            gravity: f64::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_mass_and_drag() {
        let params = PhysicsParameters {
            mass: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = PhysicsParameters {
            drag_coefficient: -0.01,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
