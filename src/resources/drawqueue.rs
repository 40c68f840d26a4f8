//! Draw submissions produced by the render pass.
//!
//! The render systems push one [`DrawCall`] per visible item per frame. The
//! external renderer drains the queue after [`Simulation::advance`] returns.
//!
//! [`Simulation::advance`]: crate::simulation::Simulation::advance

use bevy_ecs::prelude::{Entity, Resource};
use glam::{Mat4, Vec3, Vec4};
use serde::Serialize;

use crate::components::selection::SelectionRect;
use crate::resources::texturestore::TextureHandle;

/// Fill color of the selection box while a drag is active.
pub const SELECTION_BOX_COLOR: Vec4 = Vec4::new(0.0, 1.0, 1.0, 0.1);

/// Visual state derived from an entity's tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub selected: bool,
    pub working: bool,
}

impl Highlight {
    /// Tint color: black, green+blue when selected, red when working.
    pub fn color(&self) -> Vec3 {
        let mut color = Vec3::ZERO;
        if self.selected {
            color.y = 1.0;
            color.z = 1.0;
        }
        if self.working {
            color.x = 1.0;
        }
        color
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DrawCall {
    Sprite {
        #[serde(skip)]
        entity: Entity,
        texture: TextureHandle,
        transform: Mat4,
        color: Vec3,
    },
    SelectionBox {
        rect: SelectionRect,
        color: Vec4,
    },
    Point {
        position: Vec3,
    },
}

#[derive(Resource, Debug, Default)]
pub struct DrawQueue {
    calls: Vec<DrawCall>,
}

impl DrawQueue {
    pub fn submit(&mut self, call: DrawCall) {
        self.calls.push(call);
    }

    /// Take every pending call, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}
