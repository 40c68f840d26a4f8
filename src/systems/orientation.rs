//! Sprite facing derived from velocity.
use std::f32::consts::FRAC_PI_2;

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::sprite::Sprite;
use crate::components::velocity::Velocity;

/// Rotate each sprite to face along its velocity.
///
/// Entities whose velocity has a zero x component keep their current
/// rotation, including purely vertical motion.
pub fn orientation(mut query: Query<(&mut Sprite, &Velocity)>) {
    for (mut sprite, velocity) in query.iter_mut() {
        if let Some(angle) = facing_angle(velocity.value) {
            sprite.rotation = angle;
        }
    }
}

/// Rotation in radians for a sprite drawn pointing up, or `None` when the
/// x component is zero.
///
/// The angle is `atan(y / x) - π/2` of the normalised direction. This is
/// `atan`, not `atan2`: opposite headings along the same line share one
/// rotation, so a unit moving left is drawn facing right.
pub fn facing_angle(velocity: Vec3) -> Option<f32> {
    if velocity.x == 0.0 {
        return None;
    }
    let direction = velocity.normalize();
    Some((direction.y / direction.x).atan() - FRAC_PI_2)
}
