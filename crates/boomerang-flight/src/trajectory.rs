//! Trajectory generation: origin + aim basis + shape → waypoints.
//!
//! The same function feeds the pre-throw preview and the flown path, so
//! what the player sees is what the boomerang does.

use std::f64::consts::PI;

use glam::DVec3;

use boomerang_core::config::FlightTuning;
use boomerang_core::types::{AimRotation, FlightPath, UP};

/// Orthonormal aim basis. `right = normalize(forward × up)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimBasis {
    pub forward: DVec3,
    pub right: DVec3,
}

impl AimBasis {
    /// Build a basis from any forward vector. Zero-length input yields a
    /// degenerate (all-zero) basis instead of dividing by zero.
    pub fn from_forward(forward: DVec3) -> Self {
        let forward = forward.normalize_or_zero();
        let right = forward.cross(UP).normalize_or_zero();
        Self { forward, right }
    }

    pub fn from_aim(aim: &AimRotation) -> Self {
        Self::from_forward(aim.forward())
    }

    /// A basis with no forward direction cannot produce a flight.
    pub fn is_degenerate(&self) -> bool {
        self.forward == DVec3::ZERO
    }
}

/// Shape parameters of the out-and-back curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryParams {
    pub outward_distance: f64,
    pub curve_radius: f64,
    pub sample_count: u32,
}

impl From<&FlightTuning> for TrajectoryParams {
    fn from(tuning: &FlightTuning) -> Self {
        Self {
            outward_distance: tuning.outward_distance,
            curve_radius: tuning.curve_radius,
            sample_count: tuning.sample_count,
        }
    }
}

/// Sample `sample_count + 1` waypoints of the boomerang curve.
///
/// At progress `t`, the forward offset is `sin(πt)·outward_distance` (out and
/// fully back) and the side offset is `sin(2πt)·curve_radius` (one full
/// lateral oscillation). A degenerate basis gives the origin-only path.
pub fn generate(origin: DVec3, basis: &AimBasis, params: &TrajectoryParams) -> FlightPath {
    if basis.is_degenerate() {
        return FlightPath::new(vec![origin]);
    }

    let n = params.sample_count;
    let mut points = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let t = if n > 0 { i as f64 / n as f64 } else { 0.0 };
        let forward_offset = (t * PI).sin() * params.outward_distance;
        let side_offset = (t * 2.0 * PI).sin() * params.curve_radius;
        points.push(origin + basis.forward * forward_offset + basis.right * side_offset);
    }
    FlightPath::new(points)
}
