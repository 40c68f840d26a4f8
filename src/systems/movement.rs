use bevy_ecs::prelude::*;

use crate::components::position::Position;
use crate::components::velocity::Velocity;
use crate::resources::simconfig::SimConfig;
use crate::resources::worldtime::WorldTime;

/// Integrate velocity into position and bounce off the playfield edges.
///
/// x and y are clamped to `[-bound, bound]` independently; the velocity
/// component of a clamped axis is inverted. z is left free.
pub fn movement(
    mut query: Query<(&mut Position, &mut Velocity)>,
    time: Res<WorldTime>,
    config: Res<SimConfig>,
) {
    let bound = config.bound;
    for (mut position, mut velocity) in query.iter_mut() {
        let delta = velocity.value * time.delta;
        position.value += delta;

        let (position, velocity) = (&mut position.value, &mut velocity.value);
        bounce(&mut position.x, &mut velocity.x, bound);
        bounce(&mut position.y, &mut velocity.y, bound);
    }
}

fn bounce(position: &mut f32, velocity: &mut f32, bound: f32) {
    if *position > bound {
        *position = bound;
        *velocity = -*velocity;
    } else if *position < -bound {
        *position = -bound;
        *velocity = -*velocity;
    }
}
