//! ECS components for simulated entities.
//!
//! Components are plain data; the systems in [`crate::systems`] give them
//! behavior.
//!
//! Submodules overview:
//! - [`job`] – active move-to-target instruction
//! - [`position`] – world-space position
//! - [`selection`] – selection tag carrying the capturing rectangle
//! - [`spawnorder`] – spawn sequence number used wherever order matters
//! - [`sprite`] – texture key, scale and rotation for rendering
//! - [`velocity`] – linear velocity integrated by the movement system

pub mod job;
pub mod position;
pub mod selection;
pub mod spawnorder;
pub mod sprite;
pub mod velocity;
