//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in `boomerang-flight` and the simulation systems.

use std::collections::HashSet;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{ActorId, AimRotation, FlightPath};

/// World-space position of an actor (collider centre).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Linear velocity, used by passive physics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Collision shape, positioned by the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Infinite plane through the position, facing `normal`.
    Plane { normal: DVec3 },
    /// Axis-aligned box centred on the position.
    Box { half_extents: DVec3 },
    /// Sphere centred on the position.
    Sphere { radius: f64 },
}

/// Collision volume and the category other movers see it as.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub shape: ColliderShape,
    pub category: SurfaceCategory,
}

/// Marks an entity as a thrown boomerang.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boomerang;

/// Marks an entity as static level geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StaticGeometry;

/// Flight record of a boomerang.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    pub mode: FlightMode,
    /// Owned path; empty when the boomerang is not path-driven.
    pub path: FlightPath,
    /// Seconds since path following began.
    pub elapsed_secs: f64,
    /// Duration mapping `elapsed_secs` onto path progress.
    pub total_flight_secs: f64,
    /// Remaining grace period while `Settling`.
    pub grace_remaining_secs: f64,
    /// Actors this boomerang no longer collides with. Allocated on first contact.
    pub ignore: HashSet<ActorId>,
    /// Set once, on entry to `Terminated`.
    pub termination: Option<TerminationCause>,
}

/// Weak back-reference from a boomerang to its thrower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerLink {
    pub thrower: Option<ActorId>,
}

/// Visual spin (degrees, wrapped to [0, 360)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub yaw_deg: f64,
}

/// A player (or scripted) thrower.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thrower {
    pub aim: AimRotation,
    /// The boomerang currently in flight, if any. At most one.
    pub active_boomerang: Option<ActorId>,
}

/// Trajectory preview shown while the thrower has no boomerang out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrajectoryPreview {
    pub path: FlightPath,
    pub visible: bool,
}

/// A destructible target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub lifetime_remaining_secs: f64,
    /// Flipped exactly once by the first destruction request.
    pub destroyed: bool,
}

/// Periodic target spawner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetSpawner {
    /// Seconds until the next spawn.
    pub next_spawn_in_secs: f64,
    pub enabled: bool,
}
