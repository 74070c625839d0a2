//! Flight system: path following, settling grace and spin.
//!
//! Each path-following boomerang sweeps from its current position to where
//! its path says it should be, then hands the classified result to the
//! flight state machine. Targets crossed on the way are destroyed and the
//! sweep is repeated past them.

use glam::DVec3;
use hecs::{Entity, World};
use tracing::{debug, trace};

use boomerang_core::components::{Boomerang, FlightState, OwnerLink, Position, Spin, Velocity};
use boomerang_core::config::FlightTuning;
use boomerang_core::events::GameEvent;
use boomerang_core::types::ActorId;
use boomerang_flight::classify::{classify, Contact};
use boomerang_flight::fsm::{self, TickPlan, Transition};

use crate::ids;
use crate::score::ScoreState;
use crate::systems::sweep::{CollisionScene, SweepFilter};
use crate::systems::targets;

/// Targets one sweep may pass through before the rest are left to the
/// state machine.
const MAX_PASS_THROUGHS: usize = 8;

/// What one boomerang did this tick.
pub(crate) struct BoomerangStep {
    pub position: Option<DVec3>,
    pub velocity: Option<DVec3>,
    pub struck: Vec<ActorId>,
    pub transition: Option<Transition>,
}

/// Returns the boomerangs that started settling this tick. They rest at
/// their contact point until the next tick.
pub fn run(
    world: &mut World,
    scene: &CollisionScene,
    tuning: &FlightTuning,
    score_award: u32,
    dt: f64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> Vec<Entity> {
    let flyers: Vec<Entity> = world
        .query::<(&Boomerang, &FlightState)>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let mut settled = Vec::new();
    for entity in flyers {
        if let Some(step) = advance(world, entity, scene, tuning, dt) {
            if matches!(step.transition, Some(Transition::Settling { .. })) {
                settled.push(entity);
            }
            apply(world, entity, step, score_award, score, events);
        }
    }

    for (_entity, (state, spin)) in world.query_mut::<(&FlightState, &mut Spin)>() {
        if fsm::spins(state.mode) {
            spin.yaw_deg = fsm::advance_spin(spin.yaw_deg, tuning.spin_rate_deg, dt);
        }
    }
    settled
}

fn advance(
    world: &World,
    entity: Entity,
    scene: &CollisionScene,
    tuning: &FlightTuning,
    dt: f64,
) -> Option<BoomerangStep> {
    let mut state = world.get::<&mut FlightState>(entity).ok()?;
    let from = world.get::<&Position>(entity).ok()?.0;
    let owner = owner_of(world, entity);

    match fsm::begin_tick(&mut state, dt) {
        TickPlan::Sweep { desired, alpha } => {
            let (contact, mut struck) = sweep_through_targets(
                scene,
                from,
                desired,
                tuning.sweep_radius,
                ids::actor_id(entity),
                owner,
                &mut state,
            );
            let outcome = fsm::resolve_sweep(
                &mut state,
                desired,
                alpha,
                contact,
                tuning.settling_grace_period,
            )?;
            struck.extend(outcome.destroyed_target);
            trace!(boomerang = ids::actor_id(entity).0, alpha, ?contact, "path step");
            Some(BoomerangStep {
                position: Some(outcome.position),
                velocity: None,
                struck,
                transition: outcome.transition,
            })
        }
        TickPlan::Terminate(cause) => Some(BoomerangStep {
            position: None,
            velocity: None,
            struck: Vec::new(),
            transition: Some(Transition::Terminated(cause)),
        }),
        TickPlan::Idle | TickPlan::Passive => None,
    }
}

/// Sweep, classify and pass through targets until something other than a
/// target (or nothing) is in the way.
pub(crate) fn sweep_through_targets(
    scene: &CollisionScene,
    from: DVec3,
    to: DVec3,
    radius: f64,
    mover: ActorId,
    owner: Option<ActorId>,
    state: &mut FlightState,
) -> (Contact, Vec<ActorId>) {
    let mut struck = Vec::new();
    loop {
        let filter = SweepFilter {
            mover,
            owner,
            ignore: &state.ignore,
        };
        let hit = scene.sweep_sphere(from, to, radius, &filter);
        match classify(hit.as_ref(), &state.ignore) {
            Contact::PassThrough { target } if struck.len() < MAX_PASS_THROUGHS => {
                if !fsm::pass_through(state, target) {
                    return (Contact::PassThrough { target }, struck);
                }
                struck.push(target);
            }
            contact => return (contact, struck),
        }
    }
}

pub(crate) fn owner_of(world: &World, entity: Entity) -> Option<ActorId> {
    world
        .get::<&OwnerLink>(entity)
        .ok()
        .and_then(|link| link.thrower)
}

/// Write a step back to the world: move, destroy struck targets, report
/// settling. Terminations are reported by cleanup.
pub(crate) fn apply(
    world: &mut World,
    entity: Entity,
    step: BoomerangStep,
    score_award: u32,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    if let Some(position) = step.position {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 = position;
        }
    }
    if let Some(velocity) = step.velocity {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            vel.0 = velocity;
        }
    }

    let owner = owner_of(world, entity);
    for target in step.struck {
        targets::destroy_target(world, target, owner, score_award, score, events);
    }

    let boomerang = ids::actor_id(entity);
    match step.transition {
        Some(Transition::Settling { location }) => {
            debug!(boomerang = boomerang.0, ?location, "blocking contact, settling");
            events.push(GameEvent::BoomerangSettling {
                boomerang,
                location,
            });
        }
        Some(Transition::Terminated(cause)) => {
            debug!(boomerang = boomerang.0, ?cause, "flight terminated");
        }
        None => {}
    }
}
