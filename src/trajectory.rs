//! Trajectory point sequences and derived flight quantities.

use nalgebra::Vector2;

/// Single point on a simulated flight path
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    /// Elapsed flight time in seconds
    pub time_s: f64,
    /// Position (x, y) in meters
    pub position: Vector2<f64>,
    /// Velocity (vx, vy) in m/s
    pub velocity: Vector2<f64>,
}

impl TrajectoryPoint {
    /// Speed magnitude in m/s
    pub fn speed_mps(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Ordered, append-only sequence of trajectory points.
///
/// Immutable once the producing simulation terminates; consumers read it
/// without modifying it. Points start at the origin and are strictly
/// increasing in time. The final point is the first one that dipped below
/// ground level; nothing is appended after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    /// All points in flight order
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The highest point of the flight
    pub fn apex(&self) -> Option<&TrajectoryPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
    }

    /// Horizontal distance covered at the end of the flight, in meters
    pub fn range_m(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.position.x)
    }

    /// Total flight time in seconds
    pub fn time_of_flight_s(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.time_s)
    }

    /// Speed at the final point, in m/s
    pub fn impact_speed_mps(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.speed_mps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(t: f64, x: f64, y: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            time_s: t,
            position: Vector2::new(x, y),
            velocity: Vector2::new(10.0, 0.0),
        }
    }

    #[test]
    fn test_apex_finds_highest_point() {
        let mut traj = Trajectory::with_capacity(5);
        traj.push(point(0.0, 0.0, 0.0));
        traj.push(point(1.0, 10.0, 4.0));
        traj.push(point(2.0, 20.0, 6.5));
        traj.push(point(3.0, 30.0, 4.0));
        traj.push(point(4.0, 40.0, -0.1));

        let apex = traj.apex().unwrap();
        assert!((apex.position.y - 6.5).abs() < 1e-12);
        assert!((apex.position.x - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_flight_summary_from_last_point() {
        let mut traj = Trajectory::with_capacity(2);
        traj.push(point(0.0, 0.0, 0.0));
        traj.push(point(2.5, 42.0, -0.05));

        assert!((traj.range_m() - 42.0).abs() < 1e-12);
        assert!((traj.time_of_flight_s() - 2.5).abs() < 1e-12);
        assert!((traj.impact_speed_mps() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_trajectory_summaries() {
        let traj = Trajectory::with_capacity(0);
        assert!(traj.is_empty());
        assert!(traj.apex().is_none());
        assert_eq!(traj.range_m(), 0.0);
    }
}
