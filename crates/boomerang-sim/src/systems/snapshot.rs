//! Snapshot builder: reads the ECS world and assembles a `GameStateSnapshot`.

use hecs::World;

use boomerang_core::components::*;
use boomerang_core::events::GameEvent;
use boomerang_core::state::*;
use boomerang_core::types::SimTime;
use boomerang_flight::fsm;

use crate::ids;
use crate::score::ScoreState;
use crate::systems::round::RoundState;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    round: &RoundState,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase: round.phase,
        round_remaining_secs: round.remaining_secs,
        score: score.view(),
        throwers: build_throwers(world),
        boomerangs: build_boomerangs(world),
        targets: build_targets(world),
        events,
    }
}

fn build_throwers(world: &World) -> Vec<ThrowerView> {
    world
        .query::<(&Thrower, &Position, &TrajectoryPreview)>()
        .iter()
        .map(|(entity, (thrower, pos, preview))| ThrowerView {
            id: ids::actor_id(entity),
            position: pos.0,
            aim: thrower.aim,
            active_boomerang: thrower.active_boomerang,
            preview: if preview.visible {
                preview.path.points().to_vec()
            } else {
                Vec::new()
            },
        })
        .collect()
}

fn build_boomerangs(world: &World) -> Vec<BoomerangView> {
    world
        .query::<(&Boomerang, &Position, &FlightState, &Spin)>()
        .iter()
        .map(|(entity, (_b, pos, state, spin))| BoomerangView {
            id: ids::actor_id(entity),
            position: pos.0,
            mode: state.mode,
            progress: fsm::display_progress(state),
            spin_deg: spin.yaw_deg,
        })
        .collect()
}

fn build_targets(world: &World) -> Vec<TargetView> {
    world
        .query::<(&Target, &Position)>()
        .iter()
        .filter(|(_, (target, _))| !target.destroyed)
        .map(|(entity, (target, pos))| TargetView {
            id: ids::actor_id(entity),
            position: pos.0,
            lifetime_remaining_secs: target.lifetime_remaining_secs,
        })
        .collect()
}
