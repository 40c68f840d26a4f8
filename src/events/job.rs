//! Move request event and the observer that queues it.
//!
//! The input layer raises [`TargetRequestedEvent`] for every move command.
//! [`observe_target_requested`] appends a [`Job`] to the [`JobQueue`]; the
//! job system hands it to an idle entity on a later frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::job::Job;
use crate::resources::jobqueue::JobQueue;

/// A move to `target` was requested.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetRequestedEvent {
    pub target: Vec3,
}

/// Global observer that enqueues a job for each requested target.
pub fn observe_target_requested(trigger: On<TargetRequestedEvent>, mut queue: ResMut<JobQueue>) {
    let target = trigger.event().target;
    queue.push(Job::new(target));
    debug!("Queued job to {:?} ({} pending)", target, queue.len());
}
