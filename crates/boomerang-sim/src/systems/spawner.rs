//! Target spawner: drops a target at a random polar offset every interval.

use std::f64::consts::TAU;

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use boomerang_core::components::{Position, TargetSpawner};
use boomerang_core::config::SpawnerTuning;
use boomerang_core::events::GameEvent;

use crate::ids;
use crate::world_setup;

/// Tick every enabled spawner, spawning as many targets as intervals elapsed.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &SpawnerTuning,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    let mut due = Vec::new();
    for (_entity, (pos, spawner)) in world.query_mut::<(&Position, &mut TargetSpawner)>() {
        if !spawner.enabled {
            continue;
        }
        spawner.next_spawn_in_secs -= dt;
        while spawner.next_spawn_in_secs <= 0.0 && tuning.interval_secs > 0.0 {
            due.push(pos.0 + random_offset(rng, tuning));
            spawner.next_spawn_in_secs += tuning.interval_secs;
        }
    }

    for position in due {
        let target = world_setup::spawn_target(world, position, tuning);
        let id = ids::actor_id(target);
        debug!(target_id = id.0, ?position, "target spawned");
        events.push(GameEvent::TargetSpawned {
            target: id,
            position,
        });
    }
}

/// Polar offset: angle in [0, 2π), distance and height within the tuned ranges.
pub fn random_offset(rng: &mut ChaCha8Rng, tuning: &SpawnerTuning) -> DVec3 {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(tuning.min_radius..=tuning.max_radius);
    let height = rng.gen_range(tuning.min_height..=tuning.max_height);
    DVec3::new(distance * angle.cos(), distance * angle.sin(), height)
}

/// Arm (or disarm) every spawner. Arming restarts the interval.
pub fn set_enabled(world: &mut World, tuning: &SpawnerTuning, enabled: bool) {
    for (_entity, spawner) in world.query_mut::<&mut TargetSpawner>() {
        spawner.enabled = enabled;
        if enabled {
            spawner.next_spawn_in_secs = tuning.interval_secs;
        }
    }
}
