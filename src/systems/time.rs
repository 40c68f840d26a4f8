//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame before the schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Record the frame delta on the `WorldTime` resource.
///
/// `dt` is the wall-clock seconds since the previous frame. Negative deltas
/// are treated as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = dt.max(0.0);
    wt.elapsed += dt;
    wt.delta = dt;
    wt.frame_count += 1;
}
