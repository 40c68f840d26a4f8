use bevy_ecs::prelude::Resource;

use crate::components::spawnorder::SpawnOrder;

/// Source of [`SpawnOrder`] numbers for the world.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SpawnSequence {
    next: u64,
}

impl SpawnSequence {
    /// Hand out the next number in sequence.
    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }

    /// How many numbers have been handed out.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
