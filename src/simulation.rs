//! The simulation world.
//!
//! [`Simulation`] owns the ECS [`World`] and the per-frame [`Schedule`], and is
//! the only surface the window, input and rendering layers talk to:
//!
//! - [`advance`](Simulation::advance) runs one full system pass;
//! - [`request_move`](Simulation::request_move) queues a job;
//! - [`begin_selection`](Simulation::begin_selection),
//!   [`update_selection`](Simulation::update_selection) and
//!   [`end_selection`](Simulation::end_selection) drive the selection drag;
//! - [`drain_draw_calls`](Simulation::drain_draw_calls) and
//!   [`renderables`](Simulation::renderables) feed the renderer.
//!
//! # Frame
//!
//! 1. Update [`WorldTime`] with the frame delta and clear the [`DrawQueue`]
//! 2. movement → orientation → job → selection → render, strictly in that
//!    order on a single thread
//!
//! Intents raised between frames go through observers and only touch
//! resources; entities change during the next `advance`.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use fastrand::Rng;
use glam::Vec3;
use log::info;

use crate::components::job::Job;
use crate::components::selection::{Selection, SelectionRect};
use crate::components::sprite::Sprite;
use crate::events::job::{TargetRequestedEvent, observe_target_requested};
use crate::events::selection::{
    SelectionChangedEvent, SelectionEndedEvent, SelectionStartedEvent, observe_selection_changed,
    observe_selection_ended, observe_selection_started,
};
use crate::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use crate::resources::debugmode::DebugMode;
use crate::resources::drawqueue::{DrawCall, DrawQueue};
use crate::resources::jobqueue::JobQueue;
use crate::resources::selectionregion::SelectionRegion;
use crate::resources::simconfig::SimConfig;
use crate::resources::spawnsequence::SpawnSequence;
use crate::resources::texturestore::{TextureLoader, TextureStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::job::job_system;
use crate::systems::movement::movement;
use crate::systems::orientation::orientation;
use crate::systems::render::{
    Renderable, collect_renderables, debug_render_system, entity_render_system,
    selection_box_render_system,
};
use crate::systems::selection::selection_system;
use crate::systems::spawn::{scatter_units, spawn_unit};
use crate::systems::time::update_world_time;

pub struct Simulation {
    world: World,
    schedule: Schedule,
}

impl Simulation {
    /// Create an empty simulation: resources inserted, observers registered,
    /// no entities.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(JobQueue::default());
        world.insert_resource(SelectionRegion::new(config.changed_activates));
        world.insert_resource(TextureStore::new());
        world.insert_resource(DrawQueue::default());
        world.insert_resource(SpawnSequence::default());
        if config.debug {
            world.insert_resource(DebugMode {});
        }
        world.insert_resource(config);

        // One observer per event kind.
        world.add_observer(observe_target_requested);
        world.add_observer(observe_selection_started);
        world.add_observer(observe_selection_changed);
        world.add_observer(observe_selection_ended);
        world.add_observer(switch_debug_observer);
        world.flush();

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                movement,
                orientation,
                job_system,
                selection_system,
                entity_render_system,
                selection_box_render_system,
                debug_render_system,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    /// Create a simulation and scatter the configured units, loading their
    /// texture through `loader` first.
    pub fn with_units(config: SimConfig, loader: &mut dyn TextureLoader) -> Self {
        let mut simulation = Self::new(config);
        simulation.populate(loader);
        simulation
    }

    /// Load the unit texture and scatter `spawn_count` units seeded from the
    /// configuration.
    pub fn populate(&mut self, loader: &mut dyn TextureLoader) -> Vec<Entity> {
        let config = self.world.resource::<SimConfig>().clone();
        self.world
            .resource_mut::<TextureStore>()
            .load(&config.texture, loader);
        let mut rng = Rng::with_seed(config.seed);
        scatter_units(&mut self.world, &config, &mut rng)
    }

    /// Spawn a unit with a position and velocity and no sprite.
    pub fn spawn_unit(&mut self, position: Vec3, velocity: Vec3) -> Entity {
        spawn_unit(&mut self.world, position, velocity)
    }

    /// Spawn a unit that also carries a sprite.
    pub fn spawn_sprite_unit(&mut self, position: Vec3, velocity: Vec3, sprite: Sprite) -> Entity {
        let entity = spawn_unit(&mut self.world, position, velocity);
        self.world.entity_mut(entity).insert(sprite);
        entity
    }

    /// Run one simulation step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.world.resource_mut::<DrawQueue>().clear();
        self.schedule.run(&mut self.world);
    }

    /// Queue a move to `target` for the next idle unit.
    pub fn request_move(&mut self, target: Vec3) {
        self.world.trigger(TargetRequestedEvent { target });
    }

    pub fn begin_selection(&mut self, rect: SelectionRect, session: u32) {
        self.world.trigger(SelectionStartedEvent {
            selection: Selection::new(session, rect),
        });
    }

    pub fn update_selection(&mut self, rect: SelectionRect, session: u32) {
        self.world.trigger(SelectionChangedEvent {
            selection: Selection::new(session, rect),
        });
    }

    pub fn end_selection(&mut self) {
        self.world.trigger(SelectionEndedEvent {});
    }

    pub fn toggle_debug(&mut self) {
        self.world.trigger(SwitchDebugEvent {});
        self.world.flush();
    }

    /// Draw calls produced by the last [`advance`](Self::advance).
    pub fn draw_calls(&self) -> &[DrawCall] {
        self.world.resource::<DrawQueue>().calls()
    }

    pub fn drain_draw_calls(&mut self) -> Vec<DrawCall> {
        self.world.resource_mut::<DrawQueue>().drain()
    }

    /// Every positioned entity with its sprite transform and highlight flags.
    pub fn renderables(&mut self) -> Vec<Renderable> {
        collect_renderables(&mut self.world)
    }

    pub fn textures_mut(&mut self) -> Mut<'_, TextureStore> {
        self.world.resource_mut::<TextureStore>()
    }

    pub fn pending_jobs(&self) -> usize {
        self.world.resource::<JobQueue>().len()
    }

    pub fn is_selecting(&self) -> bool {
        self.world.resource::<SelectionRegion>().is_selecting()
    }

    pub fn is_debug(&self) -> bool {
        self.world.contains_resource::<DebugMode>()
    }

    pub fn time(&self) -> WorldTime {
        *self.world.resource::<WorldTime>()
    }

    pub fn config(&self) -> &SimConfig {
        self.world.resource::<SimConfig>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Count entities that carry component `C`.
    pub fn count_with<C: Component>(&mut self) -> usize {
        let mut query = self.world.query_filtered::<Entity, With<C>>();
        query.iter(&self.world).count()
    }

    /// Log a one-line summary of the simulation state.
    pub fn log_summary(&mut self) {
        let time = self.time();
        let selected = self.count_with::<Selection>();
        let working = self.count_with::<Job>();
        info!(
            "frame {} t={:.2}s: {} selected, {} working, {} queued",
            time.frame_count,
            time.elapsed,
            selected,
            working,
            self.pending_jobs()
        );
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::new())
    }
}
