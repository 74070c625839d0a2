//! Throw handling: validate the request, spawn the boomerang and bind it to
//! its thrower.

use glam::DVec3;
use hecs::{Entity, World};

use boomerang_core::components::{Position, Thrower, TrajectoryPreview};
use boomerang_core::config::FlightTuning;
use boomerang_core::enums::GamePhase;
use boomerang_core::error::ThrowRejected;
use boomerang_core::types::{AimRotation, FlightPath};
use boomerang_flight::fsm;
use boomerang_flight::trajectory::{self, AimBasis, TrajectoryParams};

use crate::ids;
use crate::world_setup;

/// Throw along a freshly generated path. The boomerang spawns at the
/// path's first waypoint.
pub fn request_throw(
    world: &mut World,
    thrower: Entity,
    tuning: &FlightTuning,
    phase: GamePhase,
) -> Result<Entity, ThrowRejected> {
    let (origin, aim) = ready_thrower(world, thrower, phase)?;

    let path = trajectory::generate(
        origin,
        &AimBasis::from_aim(&aim),
        &TrajectoryParams::from(tuning),
    );
    let start = path.first().unwrap_or(origin);
    let flight = fsm::launch(path, tuning.total_flight_time).ok_or(ThrowRejected::Unflyable)?;

    let boomerang = world_setup::spawn_boomerang(
        world,
        start,
        DVec3::ZERO,
        flight,
        ids::actor_id(thrower),
        tuning.sweep_radius,
    );
    bind(world, thrower, boomerang);
    Ok(boomerang)
}

/// Throw with no path: the boomerang leaves the thrower at `throw_speed`
/// along `direction` and is moved by passive physics only.
pub fn request_direct_throw(
    world: &mut World,
    thrower: Entity,
    direction: DVec3,
    tuning: &FlightTuning,
    phase: GamePhase,
) -> Result<Entity, ThrowRejected> {
    let (origin, _aim) = ready_thrower(world, thrower, phase)?;

    let direction = direction.normalize_or_zero();
    if direction == DVec3::ZERO {
        return Err(ThrowRejected::DegenerateAim);
    }

    let boomerang = world_setup::spawn_boomerang(
        world,
        origin,
        direction * tuning.throw_speed,
        fsm::launch_unguided(),
        ids::actor_id(thrower),
        tuning.sweep_radius,
    );
    bind(world, thrower, boomerang);
    Ok(boomerang)
}

/// Origin and aim of a thrower that may throw right now.
fn ready_thrower(
    world: &World,
    thrower: Entity,
    phase: GamePhase,
) -> Result<(DVec3, AimRotation), ThrowRejected> {
    if phase != GamePhase::Active {
        return Err(ThrowRejected::RoundNotActive);
    }
    let state = world
        .get::<&Thrower>(thrower)
        .map_err(|_| ThrowRejected::UnknownThrower)?;
    if state.active_boomerang.is_some() {
        return Err(ThrowRejected::AlreadyActive);
    }
    let origin = world
        .get::<&Position>(thrower)
        .map_err(|_| ThrowRejected::UnknownThrower)?
        .0;
    Ok((origin, state.aim))
}

fn bind(world: &mut World, thrower: Entity, boomerang: Entity) {
    if let Ok(mut state) = world.get::<&mut Thrower>(thrower) {
        state.active_boomerang = Some(ids::actor_id(boomerang));
    }
    if let Ok(mut preview) = world.get::<&mut TrajectoryPreview>(thrower) {
        preview.visible = false;
        preview.path = FlightPath::empty();
    }
}
