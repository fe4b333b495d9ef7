//! Fixed-step integration of 2D projectile motion.
//!
//! Two generators share one termination discipline: a drag trajectory from
//! semi-implicit Euler steps under gravity plus quadratic air resistance,
//! and an ideal trajectory from the drag-free closed form sampled on the
//! same time grid. Both stop on ground contact (`y < 0`) and both are
//! bounded by a hard step cap so degenerate parameter sets fail instead of
//! spinning forever.

use log::{debug, warn};
use nalgebra::Vector2;

use crate::constants::{FLIGHT_TIME_SAFETY_FACTOR, MAX_INTEGRATION_STEPS};
use crate::params::{PhysicsParameters, SimulationError};
use crate::trajectory::{Trajectory, TrajectoryPoint};

/// Mutable per-flight integration state.
///
/// Advanced one step at a time by [`SimulationState::step`]; owned
/// exclusively by the simulation that created it and discarded once the
/// trajectory is complete.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Position (x, y) in meters
    pub position: Vector2<f64>,
    /// Velocity (vx, vy) in m/s
    pub velocity: Vector2<f64>,
    /// Elapsed flight time in seconds
    pub time_s: f64,
}

impl SimulationState {
    /// State at launch: origin position, velocity resolved from the launch
    /// speed and angle, zero elapsed time.
    pub fn from_parameters(params: &PhysicsParameters) -> Self {
        let (vx0, vy0) = params.launch_velocity();
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::new(vx0, vy0),
            time_s: 0.0,
        }
    }

    /// Advance by one semi-implicit Euler step.
    ///
    /// Velocities are updated first, then positions advance with the
    /// updated velocities. The drag term uses the signed form `v·|v|` so the
    /// drag acceleration opposes the instantaneous velocity direction on
    /// each axis independently.
    pub fn step(&mut self, params: &PhysicsParameters) {
        let dt = params.time_step;
        let k_over_m = params.drag_coefficient / params.mass;

        let ax = -k_over_m * self.velocity.x * self.velocity.x.abs();
        let ay = -params.gravity - k_over_m * self.velocity.y * self.velocity.y.abs();

        self.velocity.x += ax * dt;
        self.velocity.y += ay * dt;
        self.position += self.velocity * dt;
        self.time_s += dt;
    }

    fn sample(&self) -> TrajectoryPoint {
        TrajectoryPoint {
            time_s: self.time_s,
            position: self.position,
            velocity: self.velocity,
        }
    }
}

/// Simulate projectile flight under gravity and quadratic drag.
///
/// Returns the full point sequence from launch to the first point at or
/// below ground level. Identical parameters produce bit-identical
/// trajectories.
pub fn simulate_drag(params: &PhysicsParameters) -> Result<Trajectory, SimulationError> {
    params.validate()?;

    let mut state = SimulationState::from_parameters(params);
    let mut trajectory = Trajectory::with_capacity(estimate_point_count(params));
    trajectory.push(state.sample());

    debug!(
        "drag simulation: v0={} m/s at {} deg, k/m={}, dt={}",
        params.initial_speed,
        params.launch_angle,
        params.drag_coefficient / params.mass,
        params.time_step
    );

    for _ in 0..MAX_INTEGRATION_STEPS {
        state.step(params);
        trajectory.push(state.sample());
        if state.position.y < 0.0 {
            debug!(
                "drag trajectory terminated: {} points, range {:.2} m, flight {:.3} s",
                trajectory.len(),
                trajectory.range_m(),
                trajectory.time_of_flight_s()
            );
            return Ok(trajectory);
        }
    }

    warn!(
        "drag simulation exceeded {} steps without ground contact",
        MAX_INTEGRATION_STEPS
    );
    Err(SimulationError::NonTermination {
        steps: MAX_INTEGRATION_STEPS,
    })
}

/// Sample the ideal (drag-free) closed-form trajectory on the same time
/// grid the drag integrator uses.
///
/// `x(t) = v0·cosθ·t`, `y(t) = v0·sinθ·t − ½gt²`. The step cap applies
/// here as well: with `g = 0` the projectile never returns to ground and
/// the generator must fail rather than loop forever.
pub fn simulate_ideal(params: &PhysicsParameters) -> Result<Trajectory, SimulationError> {
    params.validate()?;

    let (vx0, vy0) = params.launch_velocity();
    let dt = params.time_step;

    let mut trajectory = Trajectory::with_capacity(estimate_point_count(params));
    trajectory.push(TrajectoryPoint {
        time_s: 0.0,
        position: Vector2::zeros(),
        velocity: Vector2::new(vx0, vy0),
    });

    for i in 1..=MAX_INTEGRATION_STEPS {
        let t = i as f64 * dt;
        let x = vx0 * t;
        let y = vy0 * t - 0.5 * params.gravity * t * t;
        trajectory.push(TrajectoryPoint {
            time_s: t,
            position: Vector2::new(x, y),
            velocity: Vector2::new(vx0, vy0 - params.gravity * t),
        });
        if y < 0.0 {
            debug!(
                "ideal trajectory terminated: {} points, range {:.2} m",
                trajectory.len(),
                trajectory.range_m()
            );
            return Ok(trajectory);
        }
    }

    warn!(
        "ideal trajectory exceeded {} samples without ground contact",
        MAX_INTEGRATION_STEPS
    );
    Err(SimulationError::NonTermination {
        steps: MAX_INTEGRATION_STEPS,
    })
}

/// Capacity estimate from the drag-free time of flight. Drag only shortens
/// flight, so this over-allocates slightly instead of reallocating.
fn estimate_point_count(params: &PhysicsParameters) -> usize {
    let (_, vy0) = params.launch_velocity();
    if params.gravity > 0.0 && vy0 > 0.0 {
        let ideal_flight_s = 2.0 * vy0 / params.gravity;
        let estimate = (FLIGHT_TIME_SAFETY_FACTOR * ideal_flight_s / params.time_step) as usize;
        estimate.clamp(16, MAX_INTEGRATION_STEPS)
    } else {
        256
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> PhysicsParameters {
        PhysicsParameters::default()
    }

    fn assert_well_formed(traj: &Trajectory) {
        assert!(!traj.is_empty());
        let first = &traj.points()[0];
        assert_eq!(first.time_s, 0.0);
        assert_eq!(first.position.x, 0.0);
        assert_eq!(first.position.y, 0.0);
        for pair in traj.points().windows(2) {
            assert!(pair[1].time_s > pair[0].time_s);
        }
    }

    #[test]
    fn test_drag_trajectory_well_formed() {
        let traj = simulate_drag(&reference_params()).unwrap();
        assert_well_formed(&traj);
        // terminal point is the first below-ground one
        assert!(traj.points().last().unwrap().position.y < 0.0);
        for p in &traj.points()[..traj.len() - 1] {
            assert!(p.position.y >= 0.0);
        }
    }

    #[test]
    fn test_ideal_trajectory_well_formed() {
        let traj = simulate_ideal(&reference_params()).unwrap();
        assert_well_formed(&traj);
        assert!(traj.points().last().unwrap().position.y < 0.0);
    }

    #[test]
    fn test_drag_shortens_flight() {
        let params = reference_params();
        let drag = simulate_drag(&params).unwrap();
        let ideal = simulate_ideal(&params).unwrap();
        assert!(drag.range_m() < ideal.range_m());
        assert!(drag.apex().unwrap().position.y < ideal.apex().unwrap().position.y);
    }

    #[test]
    fn test_zero_drag_converges_to_closed_form() {
        let params = PhysicsParameters {
            drag_coefficient: 0.0,
            time_step: 0.0005,
            ..reference_params()
        };
        let drag = simulate_drag(&params).unwrap();
        let ideal = simulate_ideal(&params).unwrap();

        let apex_euler = drag.apex().unwrap().position.y;
        let apex_exact = ideal.apex().unwrap().position.y;
        let relative_error = (apex_euler - apex_exact).abs() / apex_exact;
        assert!(
            relative_error < 1e-3,
            "apex relative error {} too large",
            relative_error
        );

        // same time grid, so positions must agree pointwise to first order
        for (e, i) in drag.points().iter().zip(ideal.points()).take(1000) {
            assert!((e.time_s - i.time_s).abs() < 1e-9);
            assert!((e.position.x - i.position.x).abs() < 1e-6);
        }
    }

    #[test]
    fn test_identical_parameters_bit_identical_output() {
        let params = reference_params();
        let a = simulate_drag(&params).unwrap();
        let b = simulate_drag(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_coarse_time_step_still_terminates() {
        let params = PhysicsParameters {
            time_step: 1.0,
            ..reference_params()
        };
        let traj = simulate_drag(&params).unwrap();
        assert!(traj.len() <= MAX_INTEGRATION_STEPS);
        assert!(traj.points().last().unwrap().position.y < 0.0);
    }

    #[test]
    fn test_zero_gravity_trips_step_cap() {
        let params = PhysicsParameters {
            gravity: 0.0,
            drag_coefficient: 0.0,
            ..reference_params()
        };
        assert!(matches!(
            simulate_drag(&params),
            Err(SimulationError::NonTermination { .. })
        ));
        assert!(matches!(
            simulate_ideal(&params),
            Err(SimulationError::NonTermination { .. })
        ));
    }

    #[test]
    fn test_invalid_parameters_rejected_before_integration() {
        let params = PhysicsParameters {
            mass: 0.0,
            ..reference_params()
        };
        assert!(matches!(
            simulate_drag(&params),
            Err(SimulationError::Domain(_))
        ));
    }

    #[test]
    fn test_signed_drag_opposes_backward_motion() {
        let params = PhysicsParameters {
            drag_coefficient: 0.5,
            ..reference_params()
        };
        let mut state = SimulationState {
            position: Vector2::new(0.0, 10.0),
            velocity: Vector2::new(-10.0, 0.0),
            time_s: 0.0,
        };
        state.step(&params);
        // drag pushes +x when moving in -x, so vx moves toward zero
        assert!(state.velocity.x > -10.0);
        assert!(state.velocity.x < 0.0);
    }
}
