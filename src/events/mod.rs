//! Event types and observers used by the engine.
//!
//! Events decouple the input layer from simulation state. Observers run
//! synchronously inside [`World::trigger`](bevy_ecs::world::World::trigger),
//! so by the time a trigger returns the corresponding resource is updated.
//!
//! Submodules:
//! - [`job`] – move requests feeding the job queue
//! - [`selection`] – selection drag lifecycle (started, changed, ended)
//! - [`switchdebug`] – toggle debug point rendering on/off
pub mod job;
pub mod selection;
pub mod switchdebug;
