//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the arena (ground and walls), throwers, targets, the target
//! spawner and thrown boomerangs with appropriate component bundles.

use glam::DVec3;
use hecs::{Entity, World};

use boomerang_core::components::*;
use boomerang_core::config::{SpawnerTuning, TuningConfig, WorldTuning};
use boomerang_core::constants::*;
use boomerang_core::enums::SurfaceCategory;
use boomerang_core::types::ActorId;

/// Set up a fresh round world: arena, spawner and one player thrower.
/// Returns the player thrower.
pub fn setup_round(world: &mut World, tuning: &TuningConfig) -> Entity {
    spawn_arena(world, &tuning.world);
    spawn_spawner(world, DVec3::ZERO, &tuning.spawner);
    spawn_thrower(world, DVec3::from_array(THROWER_SPAWN))
}

/// Ground plane plus four perimeter walls.
pub fn spawn_arena(world: &mut World, tuning: &WorldTuning) {
    spawn_ground(world, tuning.ground_z);

    let half = tuning.arena_half_extent;
    let h = tuning.wall_height * 0.5;
    let t = tuning.wall_thickness * 0.5;
    let z = tuning.ground_z + h;
    for (center, half_extents) in [
        (DVec3::new(half + t, 0.0, z), DVec3::new(t, half + 2.0 * t, h)),
        (DVec3::new(-half - t, 0.0, z), DVec3::new(t, half + 2.0 * t, h)),
        (DVec3::new(0.0, half + t, z), DVec3::new(half, t, h)),
        (DVec3::new(0.0, -half - t, z), DVec3::new(half, t, h)),
    ] {
        spawn_wall(world, center, half_extents);
    }
}

pub fn spawn_ground(world: &mut World, ground_z: f64) -> Entity {
    world.spawn((
        StaticGeometry,
        Position(DVec3::new(0.0, 0.0, ground_z)),
        Collider {
            shape: ColliderShape::Plane { normal: DVec3::Z },
            category: SurfaceCategory::WorldStatic,
        },
    ))
}

/// Axis-aligned static box.
pub fn spawn_wall(world: &mut World, center: DVec3, half_extents: DVec3) -> Entity {
    world.spawn((
        StaticGeometry,
        Position(center),
        Collider {
            shape: ColliderShape::Box {
                half_extents: half_extents.abs(),
            },
            category: SurfaceCategory::WorldStatic,
        },
    ))
}

/// A thrower with default aim and a visible (not yet computed) preview.
pub fn spawn_thrower(world: &mut World, position: DVec3) -> Entity {
    world.spawn((
        Thrower::default(),
        Position(position),
        Collider {
            shape: ColliderShape::Box {
                half_extents: DVec3::from_array(THROWER_HALF_EXTENTS),
            },
            category: SurfaceCategory::Pawn,
        },
        TrajectoryPreview {
            path: Default::default(),
            visible: true,
        },
    ))
}

pub fn spawn_target(world: &mut World, position: DVec3, tuning: &SpawnerTuning) -> Entity {
    world.spawn((
        Target {
            lifetime_remaining_secs: tuning.target_lifetime,
            destroyed: false,
        },
        Position(position),
        Collider {
            shape: ColliderShape::Sphere {
                radius: tuning.target_radius,
            },
            category: tuning.target_category,
        },
    ))
}

pub fn spawn_spawner(world: &mut World, origin: DVec3, tuning: &SpawnerTuning) -> Entity {
    world.spawn((
        Position(origin),
        TargetSpawner {
            next_spawn_in_secs: tuning.interval_secs,
            enabled: false,
        },
    ))
}

/// A thrown boomerang. Path-driven flights start at rest; unguided ones
/// carry their launch velocity.
pub fn spawn_boomerang(
    world: &mut World,
    position: DVec3,
    velocity: DVec3,
    flight: FlightState,
    thrower: ActorId,
    sweep_radius: f64,
) -> Entity {
    world.spawn((
        Boomerang,
        Position(position),
        Velocity(velocity),
        Collider {
            shape: ColliderShape::Sphere {
                radius: sweep_radius,
            },
            category: SurfaceCategory::PhysicsBody,
        },
        flight,
        OwnerLink {
            thrower: Some(thrower),
        },
        Spin::default(),
    ))
}
