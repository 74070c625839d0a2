//! Round clock: Lobby → Active → RoundOver.

use hecs::World;
use tracing::info;

use boomerang_core::config::TuningConfig;
use boomerang_core::enums::GamePhase;
use boomerang_core::events::GameEvent;

use crate::score::ScoreState;
use crate::systems::{spawner, targets};

#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub phase: GamePhase,
    pub remaining_secs: f64,
}

/// Start the clock and arm the spawner. Only from `Lobby`.
pub fn start(
    world: &mut World,
    round: &mut RoundState,
    tuning: &TuningConfig,
    events: &mut Vec<GameEvent>,
) -> bool {
    if round.phase != GamePhase::Lobby {
        return false;
    }
    round.phase = GamePhase::Active;
    round.remaining_secs = tuning.round.duration_secs;
    spawner::set_enabled(world, &tuning.spawner, tuning.spawner.enabled);
    info!(duration_secs = round.remaining_secs, "round started");
    events.push(GameEvent::RoundStarted {
        duration_secs: round.remaining_secs,
    });
    true
}

/// Count down an active round. On expiry: stop spawning, clear targets
/// without scoring and announce the final score, exactly once.
pub fn run(
    world: &mut World,
    round: &mut RoundState,
    tuning: &TuningConfig,
    score: &ScoreState,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    if round.phase != GamePhase::Active {
        return;
    }
    round.remaining_secs -= dt;
    if round.remaining_secs > 0.0 {
        return;
    }

    round.remaining_secs = 0.0;
    round.phase = GamePhase::RoundOver;
    spawner::set_enabled(world, &tuning.spawner, false);
    targets::clear_all(world, events);
    info!(final_score = score.score, "round over");
    events.push(GameEvent::RoundOver {
        final_score: score.score,
    });
}
