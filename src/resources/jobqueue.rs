//! Pending move requests.
//!
//! The [`JobQueue`] is filled by the
//! [`observe_target_requested`](crate::events::job::observe_target_requested)
//! observer and drained by the [`job_system`](crate::systems::job::job_system)
//! in arrival order. Each entry is handed out at most once.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::components::job::Job;

/// FIFO of jobs waiting for an idle entity.
#[derive(Resource, Debug, Default, Clone)]
pub struct JobQueue {
    pending: VecDeque<Job>,
}

impl JobQueue {
    pub fn push(&mut self, job: Job) {
        self.pending.push_back(job);
    }

    /// Remove and return the oldest pending job.
    pub fn pop(&mut self) -> Option<Job> {
        self.pending.pop_front()
    }

    /// Oldest pending job without removing it.
    pub fn front(&self) -> Option<&Job> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate pending jobs from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.pending.iter()
    }
}
