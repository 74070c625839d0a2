//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{ActorId, AimRotation, SimTime};

/// Complete game state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Seconds left on the round clock (0 outside an active round).
    pub round_remaining_secs: f64,
    pub score: ScoreView,
    pub throwers: Vec<ThrowerView>,
    pub boomerangs: Vec<BoomerangView>,
    pub targets: Vec<TargetView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub targets_destroyed: u32,
    pub targets_expired: u32,
    pub throws: u32,
    /// Flights that came all the way back.
    pub returns: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowerView {
    pub id: ActorId,
    pub position: DVec3,
    pub aim: AimRotation,
    pub active_boomerang: Option<ActorId>,
    /// Preview waypoints; empty while hidden.
    pub preview: Vec<DVec3>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoomerangView {
    pub id: ActorId,
    pub position: DVec3,
    pub mode: FlightMode,
    /// Normalized path progress in [0, 1]; 0 when not path-driven.
    pub progress: f64,
    pub spin_deg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: ActorId,
    pub position: DVec3,
    pub lifetime_remaining_secs: f64,
}
