//! Move-to-target job.
//!
//! A [`Job`] attached to an entity means "actively seeking `target`". The
//! [`job_system`](crate::systems::job::job_system) steers the entity toward the
//! target and removes the component once the entity is close enough. An
//! entity carries at most one job at a time.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Job {
    pub target: Vec3,
}

impl Job {
    pub fn new(target: Vec3) -> Self {
        Self { target }
    }
}
