use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position of a simulated entity.
///
/// The playfield is the square `[-1, 1]²`; `z` is carried but never
/// constrained.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub value: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            value: Vec3::new(x, y, z),
        }
    }
}

impl From<Vec3> for Position {
    fn from(value: Vec3) -> Self {
        Self { value }
    }
}
