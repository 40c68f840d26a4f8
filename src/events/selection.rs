//! Selection lifecycle events and their observers.
//!
//! A drag produces `Started`, any number of `Changed`, then `Ended`. The
//! observers only update the [`SelectionRegion`] resource; entities are tagged
//! by the [`selection_system`](crate::systems::selection::selection_system)
//! on the next frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::selection::Selection;
use crate::resources::selectionregion::SelectionRegion;

/// A selection drag began with the given payload.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionStartedEvent {
    pub selection: Selection,
}

/// The rectangle of the current drag moved.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionChangedEvent {
    pub selection: Selection,
}

/// The drag finished. Tags already attached are kept.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionEndedEvent {}

pub fn observe_selection_started(
    trigger: On<SelectionStartedEvent>,
    mut region: ResMut<SelectionRegion>,
) {
    let selection = trigger.event().selection;
    debug!(
        "Selection {} started: {:?}",
        selection.cursor, selection.rect
    );
    region.start(selection);
}

/// Updates the stored rectangle.
///
/// The rectangle is always stored. Whether this also starts a drag while idle
/// depends on [`SelectionRegion::changed_activates`].
pub fn observe_selection_changed(
    trigger: On<SelectionChangedEvent>,
    mut region: ResMut<SelectionRegion>,
) {
    let selection = trigger.event().selection;
    if !region.change(selection) {
        debug!(
            "Stored selection {} while idle without starting a drag",
            selection.cursor
        );
    }
}

pub fn observe_selection_ended(
    _trigger: On<SelectionEndedEvent>,
    mut region: ResMut<SelectionRegion>,
) {
    debug!("Selection {} ended", region.current.cursor);
    region.end();
}
