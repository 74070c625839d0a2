//! Events emitted by the simulation for scoring, UI and audio feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::ThrowRejected;
use crate::types::ActorId;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    RoundStarted { duration_secs: f64 },
    RoundOver { final_score: u32 },
    BoomerangThrown {
        thrower: ActorId,
        boomerang: ActorId,
        mode: FlightMode,
    },
    ThrowRejected {
        thrower: ActorId,
        reason: ThrowRejected,
    },
    /// A blocking contact stopped scripted flight.
    BoomerangSettling { boomerang: ActorId, location: DVec3 },
    /// Fired once per flight; the thrower's active slot is cleared.
    BoomerangTerminated {
        boomerang: ActorId,
        thrower: Option<ActorId>,
        cause: TerminationCause,
    },
    TargetSpawned { target: ActorId, position: DVec3 },
    /// Fired once per target elimination.
    TargetDestroyed {
        target: ActorId,
        thrower: Option<ActorId>,
        points: u32,
    },
    /// A target was taken out of play. Only `Hit` removals score.
    TargetRemoved {
        target: ActorId,
        reason: TargetRemoval,
    },
}
