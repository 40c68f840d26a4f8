//! Linear velocity component.
//!
//! Written by the movement system (boundary bounce) and by the job system
//! (seek). A unit carrying a [`Job`](super::job::Job) has its velocity
//! overwritten every frame, so it never bounces while seeking.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Direction times speed, in world units per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub value: Vec3,
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            value: Vec3::new(x, y, z),
        }
    }

    /// Velocity of the given `speed` along the xy-plane heading `angle` (radians).
    pub fn from_heading(angle: f32, speed: f32) -> Self {
        Self::new(angle.cos() * speed, angle.sin() * speed, 0.0)
    }

    pub fn stop(&mut self) {
        self.value = Vec3::ZERO;
    }

    pub fn is_zero(&self) -> bool {
        self.value == Vec3::ZERO
    }
}

impl From<Vec3> for Velocity {
    fn from(value: Vec3) -> Self {
        Self { value }
    }
}
