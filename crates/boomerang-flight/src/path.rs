//! Path following: elapsed time → normalized progress → position on the path.

use glam::DVec3;

use boomerang_core::types::FlightPath;

/// Normalized progress in [0, 1]. A non-positive duration means the path
/// is already complete.
pub fn progress(elapsed_secs: f64, total_flight_secs: f64) -> f64 {
    if !(total_flight_secs > 0.0) {
        return 1.0;
    }
    if elapsed_secs.is_nan() {
        return 0.0;
    }
    (elapsed_secs / total_flight_secs).clamp(0.0, 1.0)
}

/// Position at progress `alpha`, linearly interpolated between the two
/// waypoints bracketing it. `None` for a path that cannot be followed.
pub fn sample(path: &FlightPath, alpha: f64) -> Option<DVec3> {
    if !path.is_flyable() {
        return None;
    }
    let points = path.points();
    let segments = points.len() - 1;
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };

    let seg_f = alpha * segments as f64;
    let index = (seg_f.floor() as usize).min(segments - 1);
    let local_t = (seg_f - index as f64).clamp(0.0, 1.0);
    Some(points[index].lerp(points[index + 1], local_t))
}

/// Where a path-following boomerang wants to be after `elapsed_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: DVec3,
    pub alpha: f64,
}

impl PathSample {
    pub fn is_complete(&self) -> bool {
        self.alpha >= 1.0
    }
}

pub fn desired_position(
    path: &FlightPath,
    elapsed_secs: f64,
    total_flight_secs: f64,
) -> Option<PathSample> {
    let alpha = progress(elapsed_secs, total_flight_secs);
    sample(path, alpha).map(|position| PathSample { position, alpha })
}
