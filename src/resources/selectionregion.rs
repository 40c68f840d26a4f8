//! Per-world selection drag state.
//!
//! Selection lifecycle observers write this resource; the
//! [`selection_system`](crate::systems::selection::selection_system) reads it
//! every frame. The rectangle survives [`SelectionRegion::end`] but is inert
//! until the next drag starts.

use bevy_ecs::prelude::Resource;

use crate::components::selection::Selection;

/// Whether a selection drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting,
}

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SelectionRegion {
    pub phase: SelectionPhase,
    /// Current payload: drag session id plus rectangle.
    pub current: Selection,
    /// When true, a `SelectionChanged` received while idle starts a drag.
    pub changed_activates: bool,
}

impl SelectionRegion {
    pub fn new(changed_activates: bool) -> Self {
        Self {
            changed_activates,
            ..Self::default()
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.phase == SelectionPhase::Selecting
    }

    /// Enter `Selecting` with a fresh payload.
    pub fn start(&mut self, selection: Selection) {
        self.current = selection;
        self.phase = SelectionPhase::Selecting;
    }

    /// Update the stored payload.
    ///
    /// The payload is always replaced. While idle the drag is only (re)started
    /// when `changed_activates` is set. Returns whether the region is
    /// selecting afterwards.
    pub fn change(&mut self, selection: Selection) -> bool {
        self.current = selection;
        if self.phase == SelectionPhase::Idle && self.changed_activates {
            self.phase = SelectionPhase::Selecting;
        }
        self.is_selecting()
    }

    pub fn end(&mut self) {
        self.phase = SelectionPhase::Idle;
    }
}
