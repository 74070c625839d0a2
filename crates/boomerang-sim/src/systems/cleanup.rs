//! Cleanup system: despawns terminated boomerangs and removed targets.
//!
//! A terminated boomerang notifies its thrower through the ownership link
//! before it is despawned, so the thrower can throw again on the next tick.

use hecs::{Entity, World};
use tracing::info;

use boomerang_core::components::{Boomerang, FlightState, OwnerLink, Target};
use boomerang_core::enums::{FlightMode, TerminationCause};
use boomerang_core::events::GameEvent;

use crate::ids;
use crate::ownership;
use crate::score::ScoreState;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    let mut terminated = Vec::new();
    for (entity, (_boomerang, state, link)) in
        world.query_mut::<(&Boomerang, &FlightState, &OwnerLink)>()
    {
        if state.mode == FlightMode::Terminated {
            let cause = state.termination.unwrap_or(TerminationCause::External);
            terminated.push((entity, link.thrower, cause));
        }
    }

    for (entity, thrower, cause) in terminated {
        let boomerang = ids::actor_id(entity);
        let notified = ownership::notify_thrower_of_destruction(world, thrower, boomerang);
        if cause == TerminationCause::PathComplete {
            score.returns += 1;
        }
        info!(boomerang = boomerang.0, ?cause, notified, "boomerang destroyed");
        events.push(GameEvent::BoomerangTerminated {
            boomerang,
            thrower,
            cause,
        });
        despawn_buffer.push(entity);
    }

    for (entity, target) in world.query_mut::<&Target>() {
        if target.destroyed {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
