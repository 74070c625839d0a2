//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Flight mode of a boomerang.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightMode {
    /// Moved along a precomputed path by swept moves.
    #[default]
    FollowingPath,
    /// Thrown without a path: moved only by passive physics, spinning.
    PhysicsDriven,
    /// Stopped by a blocking contact; lingers for the grace period.
    Settling,
    /// Destroyed. No further updates.
    Terminated,
}

/// Collision category of a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceCategory {
    /// Ground, walls and other immovable level geometry.
    #[default]
    WorldStatic,
    /// Movable level actors (targets by default).
    WorldDynamic,
    /// Simulated bodies such as boomerangs.
    PhysicsBody,
    /// Thrower bodies.
    Pawn,
}

/// Why a boomerang reached `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationCause {
    /// Reached the end of its path: the return case.
    PathComplete,
    /// Grace period after a blocking contact elapsed.
    SettleTimeout,
    /// Fell out of the world.
    OutOfBounds,
    /// Destroyed by the host.
    External,
}

/// Why a target left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRemoval {
    /// Struck by a boomerang (scored).
    Hit,
    /// Lifetime ran out.
    Expired,
    /// Cleared at the end of the round.
    RoundOver,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Lobby,
    Active,
    RoundOver,
}
