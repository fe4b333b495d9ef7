//! Projection of trajectories into a renderer's screen space.
//!
//! The rendering collaborator owns the scene layout; from this side its
//! coordinate mapping is an opaque `(x, y) → screen point` function. The
//! engine builds display point sequences through the [`ViewportMapper`]
//! trait without ever inspecting the mapping.

use crate::trajectory::Trajectory;

/// Opaque world-to-screen coordinate mapping supplied by the renderer
pub trait ViewportMapper {
    fn to_screen(&self, x: f64, y: f64) -> (f64, f64);
}

impl<F> ViewportMapper for F
where
    F: Fn(f64, f64) -> (f64, f64),
{
    fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        self(x, y)
    }
}

/// Simple affine mapper for terminal and demo output
#[derive(Debug, Clone)]
pub struct LinearViewport {
    pub x_scale: f64,
    pub y_scale: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl ViewportMapper for LinearViewport {
    fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.x_offset + self.x_scale * x,
            self.y_offset + self.y_scale * y,
        )
    }
}

/// Map every trajectory point into screen coordinates, in flight order.
pub fn project<M: ViewportMapper>(trajectory: &Trajectory, mapper: &M) -> Vec<(f64, f64)> {
    trajectory
        .points()
        .iter()
        .map(|p| mapper.to_screen(p.position.x, p.position.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::simulate_drag;
    use crate::params::PhysicsParameters;

    #[test]
    fn test_project_through_closure() {
        let traj = simulate_drag(&PhysicsParameters::default()).unwrap();
        let mapper = |x: f64, y: f64| (x * 2.0, y * 2.0 + 1.0);
        let screen = project(&traj, &mapper);

        assert_eq!(screen.len(), traj.len());
        assert_eq!(screen[0], (0.0, 1.0));
    }

    #[test]
    fn test_linear_viewport_is_affine() {
        let viewport = LinearViewport {
            x_scale: 10.0,
            y_scale: -10.0,
            x_offset: 5.0,
            y_offset: 100.0,
        };
        assert_eq!(viewport.to_screen(0.0, 0.0), (5.0, 100.0));
        assert_eq!(viewport.to_screen(1.0, 2.0), (15.0, 80.0));
    }
}
