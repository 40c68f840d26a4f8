//! RTS engine library.
//!
//! A small real-time strategy simulation core on bevy_ecs: units bounce
//! around a square playfield, take move-to-target jobs from a queue, and are
//! selected by dragging a rectangle. Rendering, windowing and texture loading
//! stay outside; the engine hands them draw calls and texture keys.

pub mod components;
pub mod error;
pub mod events;
pub mod input;
pub mod resources;
pub mod simulation;
pub mod systems;
