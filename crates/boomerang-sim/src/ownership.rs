//! Ownership link: a boomerang tells its thrower when it is destroyed.
//!
//! The link is a weak `ActorId`. Every resolution checks liveness, so a
//! thrower removed mid-flight turns notification into a no-op.

use hecs::World;

use boomerang_core::components::{Thrower, TrajectoryPreview};
use boomerang_core::types::ActorId;

use crate::ids;

/// Clear the thrower's active slot and show its preview again.
///
/// Returns `false` without touching anything when the thrower no longer
/// exists or its active slot already names a different boomerang.
pub fn notify_thrower_of_destruction(
    world: &mut World,
    thrower: Option<ActorId>,
    boomerang: ActorId,
) -> bool {
    let Some(entity) = thrower.and_then(ids::entity) else {
        return false;
    };

    {
        let Ok(mut state) = world.get::<&mut Thrower>(entity) else {
            return false;
        };
        if state.active_boomerang != Some(boomerang) {
            return false;
        }
        state.active_boomerang = None;
    }

    if let Ok(mut preview) = world.get::<&mut TrajectoryPreview>(entity) {
        preview.visible = true;
    }
    true
}
