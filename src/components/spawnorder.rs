use bevy_ecs::prelude::Component;

/// Monotonic spawn sequence number.
///
/// `Entity` ids do not sort in spawn order, so anything that must visit units
/// in the order they were created sorts on this instead. Assigned once by
/// [`spawn_unit`](crate::systems::spawn::spawn_unit) and
/// [`scatter_units`](crate::systems::spawn::scatter_units), never changed.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);
