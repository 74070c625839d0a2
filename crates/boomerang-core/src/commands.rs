//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. They act on
//! the engine's player thrower.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Aim ---
    /// Add to the aim yaw (degrees).
    Turn { degrees: f64 },
    /// Add to the aim pitch (degrees), clamped to the pitch limit.
    LookUp { degrees: f64 },

    // --- Throwing ---
    /// Throw along the previewed curved path.
    Throw,
    /// Throw without a path, launched along `direction` under passive physics.
    ThrowDirect { direction: DVec3 },

    // --- Round control ---
    /// Build the arena and start the round clock.
    StartRound,
    /// Tear the world down and start a fresh round.
    Restart,
}
