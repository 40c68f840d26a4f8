//! Selection tag and its rectangle payload.
//!
//! An entity carrying [`Selection`] is currently selected by the player. The
//! tag holds a copy of the selection that captured the entity: the cursor
//! (drag session) id and the rectangle in world coordinates.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SelectionRect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle spanned by two arbitrary corners, normalised so min <= max.
    pub fn from_corners(a: (f32, f32), b: (f32, f32)) -> Self {
        Self {
            min_x: a.0.min(b.0),
            min_y: a.1.min(b.1),
            max_x: a.0.max(b.0),
            max_y: a.1.max(b.1),
        }
    }

    /// Strict containment test on x and y; points on an edge are outside.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x > self.min_x && point.y > self.min_y && point.x < self.max_x && point.y < self.max_y
    }
}

/// Tag component marking an entity as selected.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Selection {
    /// Id of the drag session (cursor) that produced this selection.
    pub cursor: u32,
    pub rect: SelectionRect,
}

impl Selection {
    pub fn new(cursor: u32, rect: SelectionRect) -> Self {
        Self { cursor, rect }
    }
}
