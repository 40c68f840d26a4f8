//! Job assignment and seek steering.
//!
//! Each frame runs two phases:
//!
//! 1. **Seek**: every entity holding a [`Job`] steers straight at its target
//!    at [`SimConfig::seek_speed`], overwriting whatever velocity it had. Once
//!    closer than [`SimConfig::arrival_epsilon`] the job is removed and the
//!    entity stops dead.
//! 2. **Assignment** (only with pending jobs): the oldest queued job goes to the
//!    first idle *selected* entity, if there is one. After that every idle
//!    entity, selected or not, takes one job in spawn order until either the
//!    queue or the idle entities run out.
//!
//! Insertions and removals are deferred through [`Commands`], so the
//! assignment phase works from a snapshot and tracks claimed entities itself.
//! Spawn order comes from [`SpawnOrder`], never from `Entity` ids.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::job::Job;
use crate::components::position::Position;
use crate::components::selection::Selection;
use crate::components::spawnorder::SpawnOrder;
use crate::components::velocity::Velocity;
use crate::resources::jobqueue::JobQueue;
use crate::resources::simconfig::SimConfig;

/// Outcome of one seek step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seek {
    /// Close enough; stop and drop the job.
    Arrived,
    /// Keep going with this velocity.
    Steer(Vec3),
}

/// Velocity toward `target` at constant `speed`, or [`Seek::Arrived`] when
/// `position` is within `epsilon`.
pub fn seek(position: Vec3, target: Vec3, speed: f32, epsilon: f32) -> Seek {
    let direction = target - position;
    if direction.length() < epsilon {
        Seek::Arrived
    } else {
        Seek::Steer(direction.normalize() * speed)
    }
}

/// An entity without a job this frame, and whether it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleEntity {
    pub entity: Entity,
    pub selected: bool,
}

/// Pop jobs from `queue` for the idle entities, which must be in spawn order.
///
/// The first selected idle entity is served first and consumes exactly one
/// job. The remaining entities are then served in order, one job each. An
/// entity is never handed two jobs and a job is never handed out twice.
pub fn assign_jobs(queue: &mut JobQueue, idle: &[IdleEntity]) -> Vec<(Entity, Job)> {
    let mut assigned = Vec::new();
    let mut claimed: FxHashSet<Entity> = FxHashSet::default();

    if let Some(first_selected) = idle.iter().find(|candidate| candidate.selected)
        && let Some(job) = queue.pop()
    {
        claimed.insert(first_selected.entity);
        assigned.push((first_selected.entity, job));
    }

    for candidate in idle {
        if claimed.contains(&candidate.entity) {
            continue;
        }
        let Some(job) = queue.pop() else {
            break;
        };
        claimed.insert(candidate.entity);
        assigned.push((candidate.entity, job));
    }

    assigned
}

pub fn job_system(
    config: Res<SimConfig>,
    mut queue: ResMut<JobQueue>,
    mut query: Query<(
        Entity,
        &SpawnOrder,
        &Position,
        &mut Velocity,
        Option<&Job>,
        Has<Selection>,
    )>,
    mut commands: Commands,
) {
    let mut idle: Vec<(SpawnOrder, IdleEntity)> = Vec::new();

    for (entity, order, position, mut velocity, job, selected) in query.iter_mut() {
        let Some(job) = job else {
            idle.push((*order, IdleEntity { entity, selected }));
            continue;
        };
        match seek(
            position.value,
            job.target,
            config.seek_speed,
            config.arrival_epsilon,
        ) {
            Seek::Arrived => {
                debug!("{:?} reached {:?}", entity, job.target);
                commands.entity(entity).remove::<Job>();
                velocity.stop();
                idle.push((*order, IdleEntity { entity, selected }));
            }
            Seek::Steer(v) => velocity.value = v,
        }
    }

    if queue.is_empty() {
        return;
    }

    idle.sort_by_key(|(order, _)| *order);
    let idle: Vec<IdleEntity> = idle.into_iter().map(|(_, candidate)| candidate).collect();

    for (entity, job) in assign_jobs(&mut queue, &idle) {
        debug!("Assigned job to {:?} for {:?}", entity, job.target);
        commands.entity(entity).insert(job);
    }
}
