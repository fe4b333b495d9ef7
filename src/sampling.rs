//! Resampling of dense trajectories at regular distance intervals.
//!
//! The integrator emits one point per time step; display surfaces usually
//! want values at round downrange distances instead. Sampling interpolates
//! the dense sequence on the distance axis and tags notable samples.

use serde::Serialize;

use crate::constants::{MIN_RANGE_THRESHOLD_M, MIN_SAMPLE_INTERVAL_M};
use crate::trajectory::Trajectory;

/// Flags for notable samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFlag {
    Apex,
    GroundImpact,
}

/// Trajectory values interpolated at one downrange distance
#[derive(Debug, Clone, Serialize)]
pub struct RangeSample {
    pub distance_m: f64,
    pub height_m: f64,
    pub velocity_mps: f64,
    pub time_s: f64,
    pub flags: Vec<SampleFlag>,
}

/// Sample a trajectory at regular downrange intervals.
///
/// Produces samples at `0, step_m, 2·step_m, …` up to the trajectory range,
/// linearly interpolating height, speed, and time on the distance axis.
/// A non-positive `step_m` yields no samples; steps below 0.1 m are floored
/// to keep the output bounded.
pub fn sample_at_distances(trajectory: &Trajectory, step_m: f64) -> Vec<RangeSample> {
    if step_m <= 0.0 {
        return Vec::new();
    }
    let step_size = step_m.max(MIN_SAMPLE_INTERVAL_M);

    let max_dist = trajectory.range_m();
    if max_dist < MIN_RANGE_THRESHOLD_M {
        return Vec::new();
    }

    let points = trajectory.points();
    let x_vals: Vec<f64> = points.iter().map(|p| p.position.x).collect();
    let y_vals: Vec<f64> = points.iter().map(|p| p.position.y).collect();
    let speeds: Vec<f64> = points.iter().map(|p| p.speed_mps()).collect();
    let times: Vec<f64> = points.iter().map(|p| p.time_s).collect();

    let num_steps = (max_dist / step_size) as usize + 1;
    let mut samples = Vec::with_capacity(num_steps);

    for i in 0..num_steps {
        let distance = i as f64 * step_size;
        if distance > max_dist {
            break;
        }
        samples.push(RangeSample {
            distance_m: distance,
            height_m: interpolate(&x_vals, &y_vals, distance),
            velocity_mps: interpolate(&x_vals, &speeds, distance),
            time_s: interpolate(&x_vals, &times, distance),
            flags: Vec::new(),
        });
    }

    add_sample_flags(&mut samples, trajectory);
    samples
}

/// Linear interpolation on the distance axis, clamped at the endpoints
fn interpolate(x_vals: &[f64], y_vals: &[f64], x: f64) -> f64 {
    if x_vals.is_empty() || x_vals.len() != y_vals.len() {
        return 0.0;
    }
    if x <= x_vals[0] {
        return y_vals[0];
    }
    if x >= x_vals[x_vals.len() - 1] {
        return y_vals[y_vals.len() - 1];
    }

    // binary search for the bracketing interval
    let mut left = 0;
    let mut right = x_vals.len() - 1;
    while right - left > 1 {
        let mid = (left + right) / 2;
        if x_vals[mid] <= x {
            left = mid;
        } else {
            right = mid;
        }
    }

    let x1 = x_vals[left];
    let x2 = x_vals[right];
    if (x2 - x1).abs() < f64::EPSILON {
        return y_vals[left];
    }
    y_vals[left] + (y_vals[right] - y_vals[left]) * (x - x1) / (x2 - x1)
}

fn add_sample_flags(samples: &mut [RangeSample], trajectory: &Trajectory) {
    if samples.is_empty() {
        return;
    }

    if let Some(apex) = trajectory.apex() {
        if let Some(idx) = closest_sample_index(samples, apex.position.x) {
            samples[idx].flags.push(SampleFlag::Apex);
        }
    }

    let ended_below_ground = trajectory
        .points()
        .last()
        .is_some_and(|p| p.position.y < 0.0);
    if ended_below_ground {
        let last = samples.len() - 1;
        samples[last].flags.push(SampleFlag::GroundImpact);
    }
}

fn closest_sample_index(samples: &[RangeSample], distance: f64) -> Option<usize> {
    samples
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.distance_m - distance)
                .abs()
                .total_cmp(&(b.distance_m - distance).abs())
        })
        .map(|(idx, _)| idx)
}
