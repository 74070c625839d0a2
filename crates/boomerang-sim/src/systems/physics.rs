//! Passive physics for unguided and settling boomerangs.
//!
//! Gravity, then a swept move through the same collision scene and
//! classifier as path flight. A blocking contact stops the body dead.

use glam::DVec3;
use hecs::{Entity, World};

use boomerang_core::components::{Boomerang, FlightState, Position, Velocity};
use boomerang_core::config::{FlightTuning, WorldTuning};
use boomerang_core::enums::{FlightMode, TerminationCause};
use boomerang_core::events::GameEvent;
use boomerang_flight::classify::Contact;
use boomerang_flight::fsm::{self, Transition};

use crate::ids;
use crate::score::ScoreState;
use crate::systems::flight::{apply, owner_of, sweep_through_targets, BoomerangStep};
use crate::systems::sweep::CollisionScene;

/// Bodies in `settled_this_tick` already moved this tick and are skipped.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &CollisionScene,
    settled_this_tick: &[Entity],
    flight: &FlightTuning,
    physics: &WorldTuning,
    score_award: u32,
    dt: f64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let bodies: Vec<Entity> = world
        .query::<(&Boomerang, &FlightState)>()
        .iter()
        .filter(|(_, (_, state))| {
            matches!(state.mode, FlightMode::PhysicsDriven | FlightMode::Settling)
        })
        .map(|(entity, _)| entity)
        .filter(|entity| !settled_this_tick.contains(entity))
        .collect();

    for entity in bodies {
        if let Some(step) = advance(world, entity, scene, flight, physics, dt) {
            apply(world, entity, step, score_award, score, events);
        }
    }
}

fn advance(
    world: &World,
    entity: Entity,
    scene: &CollisionScene,
    flight: &FlightTuning,
    physics: &WorldTuning,
    dt: f64,
) -> Option<BoomerangStep> {
    let mut state = world.get::<&mut FlightState>(entity).ok()?;
    if !matches!(state.mode, FlightMode::PhysicsDriven | FlightMode::Settling) {
        return None;
    }
    let from = world.get::<&Position>(entity).ok()?.0;
    let mut velocity = world.get::<&Velocity>(entity).map(|v| v.0).unwrap_or(DVec3::ZERO);

    velocity.z -= physics.gravity * dt;
    let to = from + velocity * dt;

    let (contact, mut struck) = sweep_through_targets(
        scene,
        from,
        to,
        flight.sweep_radius,
        ids::actor_id(entity),
        owner_of(world, entity),
        &mut state,
    );
    let outcome = fsm::resolve_passive(&mut state, contact, flight.settling_grace_period)?;
    struck.extend(outcome.destroyed_target);

    let (position, velocity) = match contact {
        Contact::Blocking { location, .. } => (location, DVec3::ZERO),
        _ => (to, velocity),
    };

    let mut transition = outcome.transition;
    if position.z < physics.kill_z && fsm::terminate(&mut state, TerminationCause::OutOfBounds) {
        transition = Some(Transition::Terminated(TerminationCause::OutOfBounds));
    }

    Some(BoomerangStep {
        position: Some(position),
        velocity: Some(velocity),
        struck,
        transition,
    })
}
