//! Fundamental geometric, identity and timing types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// World "up" axis. x = forward at zero yaw, y = lateral, z = up.
pub const UP: DVec3 = DVec3::Z;

/// Stable identity of a simulated actor (thrower, boomerang, target, geometry).
///
/// Built from the generational bits of the ECS handle, so an id of a
/// despawned actor never resolves to another live actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Ordered, immutable sequence of world-space waypoints.
///
/// A path is computed once per preview or throw and replaced wholesale,
/// never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    points: Vec<DVec3>,
}

impl FlightPath {
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// The empty path carried by entities that are not path-driven.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A path needs at least two waypoints to be followed.
    pub fn is_flyable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn first(&self) -> Option<DVec3> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DVec3> {
        self.points.last().copied()
    }
}

/// Aim rotation of a thrower, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AimRotation {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

impl AimRotation {
    pub fn new(yaw_deg: f64, pitch_deg: f64) -> Self {
        Self { yaw_deg, pitch_deg }
    }

    /// Unit direction the rotation points along.
    pub fn forward(&self) -> DVec3 {
        let (yaw, pitch) = (self.yaw_deg.to_radians(), self.pitch_deg.to_radians());
        DVec3::new(pitch.cos() * yaw.cos(), pitch.cos() * yaw.sin(), pitch.sin())
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one fixed tick.
    pub fn advance(&mut self) {
        self.advance_by(self.dt());
    }

    /// Advance by one tick of arbitrary length.
    pub fn advance_by(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
