//! Target lifetimes and destruction.
//!
//! Destruction only flags a target; cleanup despawns it at the end of the
//! tick. The flag makes every removal path idempotent.

use hecs::World;
use tracing::debug;

use boomerang_core::components::Target;
use boomerang_core::enums::TargetRemoval;
use boomerang_core::events::GameEvent;
use boomerang_core::types::ActorId;

use crate::ids;
use crate::score::ScoreState;

/// Count down lifetimes and expire targets that run out. No score.
pub fn run(world: &mut World, dt: f64, score: &mut ScoreState, events: &mut Vec<GameEvent>) {
    for (entity, target) in world.query_mut::<&mut Target>() {
        if target.destroyed {
            continue;
        }
        target.lifetime_remaining_secs -= dt;
        if target.lifetime_remaining_secs <= 0.0 {
            target.destroyed = true;
            score.targets_expired += 1;
            let id = ids::actor_id(entity);
            debug!(target_id = id.0, "target expired");
            events.push(GameEvent::TargetRemoved {
                target: id,
                reason: TargetRemoval::Expired,
            });
        }
    }
}

/// Destroy a target struck by a boomerang and award `points`.
///
/// Only the first call for a target has any effect; later calls in the
/// same or a following tick, or after the target is gone, return `false`.
pub fn destroy_target(
    world: &mut World,
    target: ActorId,
    thrower: Option<ActorId>,
    points: u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Some(entity) = ids::entity(target) else {
        return false;
    };
    let Ok(mut state) = world.get::<&mut Target>(entity) else {
        return false;
    };
    if state.destroyed {
        return false;
    }
    state.destroyed = true;

    score.award(points);
    debug!(target_id = target.0, points, total = score.score, "target destroyed");
    events.push(GameEvent::TargetDestroyed {
        target,
        thrower,
        points,
    });
    events.push(GameEvent::TargetRemoved {
        target,
        reason: TargetRemoval::Hit,
    });
    true
}

/// Remove every remaining target without scoring. Returns how many were
/// removed.
pub fn clear_all(world: &mut World, events: &mut Vec<GameEvent>) -> usize {
    let mut removed = 0;
    for (entity, target) in world.query_mut::<&mut Target>() {
        if target.destroyed {
            continue;
        }
        target.destroyed = true;
        removed += 1;
        events.push(GameEvent::TargetRemoved {
            target: ids::actor_id(entity),
            reason: TargetRemoval::RoundOver,
        });
    }
    debug!(removed, "targets cleared");
    removed
}
