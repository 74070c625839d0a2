//! Trajectory preview for throwers that have nothing in flight.

use hecs::World;

use boomerang_core::components::{Position, Thrower, TrajectoryPreview};
use boomerang_core::types::FlightPath;
use boomerang_flight::trajectory::{self, AimBasis, TrajectoryParams};

/// Regenerate visible previews from the current aim; hide and clear the
/// preview of any thrower with an active boomerang.
pub fn run(world: &mut World, params: &TrajectoryParams) {
    for (_entity, (thrower, pos, preview)) in
        world.query_mut::<(&Thrower, &Position, &mut TrajectoryPreview)>()
    {
        if thrower.active_boomerang.is_some() {
            preview.visible = false;
            preview.path = FlightPath::empty();
        } else {
            preview.visible = true;
            preview.path = trajectory::generate(pos.0, &AimBasis::from_aim(&thrower.aim), params);
        }
    }
}
