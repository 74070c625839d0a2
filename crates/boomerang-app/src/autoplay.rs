//! Scripted player: starts a round, turns toward the nearest target and
//! throws whenever the thrower is free.

use boomerang_core::commands::PlayerCommand;
use boomerang_core::enums::GamePhase;
use boomerang_core::state::{GameStateSnapshot, ThrowerView};

/// Yaw sweep used when no target is up.
const IDLE_TURN_DEG: f64 = 15.0;

#[derive(Debug, Default)]
pub struct Autoplay {
    started: bool,
    /// Tick of the last throw request, so one request is not repeated while
    /// the loop catches up.
    last_throw_tick: Option<u64>,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to send in response to a snapshot.
    pub fn respond(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snap.phase {
            GamePhase::Lobby if !self.started => {
                self.started = true;
                vec![PlayerCommand::StartRound]
            }
            GamePhase::Active => {
                let Some(thrower) = snap.throwers.first() else {
                    return Vec::new();
                };
                if thrower.active_boomerang.is_some() || self.throw_pending(snap.time.tick) {
                    return Vec::new();
                }
                self.last_throw_tick = Some(snap.time.tick);
                let degrees = turn_toward_nearest_target(thrower, snap).unwrap_or(IDLE_TURN_DEG);
                vec![PlayerCommand::Turn { degrees }, PlayerCommand::Throw]
            }
            _ => Vec::new(),
        }
    }

    /// The round is over and nothing is left in the air.
    pub fn is_finished(&self, snap: &GameStateSnapshot) -> bool {
        snap.phase == GamePhase::RoundOver && snap.boomerangs.is_empty()
    }

    fn throw_pending(&self, tick: u64) -> bool {
        self.last_throw_tick
            .is_some_and(|last| tick.saturating_sub(last) < 10)
    }
}

/// Yaw change (degrees, in (-180, 180]) that faces the nearest target.
fn turn_toward_nearest_target(thrower: &ThrowerView, snap: &GameStateSnapshot) -> Option<f64> {
    let nearest = snap.targets.iter().min_by(|a, b| {
        let da = a.position.distance_squared(thrower.position);
        let db = b.position.distance_squared(thrower.position);
        da.total_cmp(&db)
    })?;
    let to_target = nearest.position - thrower.position;
    if to_target.x == 0.0 && to_target.y == 0.0 {
        return None;
    }
    let desired = to_target.y.atan2(to_target.x).to_degrees();
    let mut delta = (desired - thrower.aim.yaw_deg).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    Some(delta)
}
