//! Region containment scan for the selection drag.
//!
//! While a drag is active every positioned entity is tested against the
//! current rectangle: entities strictly inside gain a [`Selection`] tag (if
//! they do not already have one), entities outside lose it. While idle
//! nothing is scanned, so tags survive the end of a drag until the next one
//! re-evaluates them.
use bevy_ecs::prelude::*;

use crate::components::position::Position;
use crate::components::selection::Selection;
use crate::resources::selectionregion::SelectionRegion;

pub fn selection_system(
    region: Res<SelectionRegion>,
    query: Query<(Entity, &Position, Has<Selection>)>,
    mut commands: Commands,
) {
    if !region.is_selecting() {
        return;
    }
    let current = region.current;
    for (entity, position, tagged) in query.iter() {
        let inside = current.rect.contains(position.value);
        if inside && !tagged {
            commands.entity(entity).insert(current);
        } else if !inside && tagged {
            commands.entity(entity).remove::<Selection>();
        }
    }
}
