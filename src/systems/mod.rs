//! Engine systems.
//!
//! The per-frame systems run in a fixed chain built by
//! [`Simulation`](crate::simulation::Simulation):
//! movement → orientation → job → selection → render.
//!
//! Submodules overview
//! - [`job`] – seek toward active targets and hand out queued jobs
//! - [`movement`] – integrate velocity and bounce off the playfield edges
//! - [`orientation`] – rotate sprites to face their velocity
//! - [`render`] – submit draw calls for sprites, the selection box and debug points
//! - [`selection`] – tag entities inside the active selection rectangle
//! - [`spawn`] – seeded initial scatter of units
//! - [`time`] – update frame delta and elapsed time

pub mod job;
pub mod movement;
pub mod orientation;
pub mod render;
pub mod selection;
pub mod spawn;
pub mod time;
