//! Initial unit scatter.
//!
//! Units are spread uniformly around the origin using an explicitly seeded
//! random source, so the same seed always produces the same layout.
use std::f32::consts::TAU;

use bevy_ecs::prelude::*;
use fastrand::Rng;
use glam::Vec3;
use log::info;

use crate::components::position::Position;
use crate::components::spawnorder::SpawnOrder;
use crate::components::sprite::Sprite;
use crate::components::velocity::Velocity;
use crate::resources::simconfig::SimConfig;
use crate::resources::spawnsequence::SpawnSequence;

fn next_spawn_order(world: &mut World) -> SpawnOrder {
    world
        .get_resource_or_insert_with(SpawnSequence::default)
        .next_order()
}

fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Spawn `config.spawn_count` units and return them in spawn order.
///
/// Each unit gets a position in `[-spread, spread)²` at z = 0, a sprite with a
/// random rotation in `[-1, 1)`, and either zero velocity or, when
/// `initial_speed` is positive, a random heading at that speed.
pub fn scatter_units(world: &mut World, config: &SimConfig, rng: &mut Rng) -> Vec<Entity> {
    let spread = config.spread;
    let entities: Vec<Entity> = (0..config.spawn_count)
        .map(|_| {
            let position = Position::new(
                random_f32_range(rng, -spread, spread),
                random_f32_range(rng, -spread, spread),
                0.0,
            );
            let velocity = if config.initial_speed > 0.0 {
                Velocity::from_heading(rng.f32() * TAU, config.initial_speed)
            } else {
                Velocity::default()
            };
            let sprite = Sprite::new(
                config.texture.clone(),
                config.sprite_scale,
                random_f32_range(rng, -1.0, 1.0),
            );
            let order = next_spawn_order(world);
            world.spawn((position, velocity, sprite, order)).id()
        })
        .collect();
    info!(
        "Scattered {} units with texture '{}'",
        entities.len(),
        config.texture
    );
    entities
}

/// Spawn a single unit with no sprite.
pub fn spawn_unit(world: &mut World, position: Vec3, velocity: Vec3) -> Entity {
    let order = next_spawn_order(world);
    world
        .spawn((Position::from(position), Velocity::from(velocity), order))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(seed: u64) -> Vec<(Vec3, f32)> {
        let mut world = World::new();
        let config = SimConfig::new();
        let mut rng = Rng::with_seed(seed);
        scatter_units(&mut world, &config, &mut rng)
            .into_iter()
            .map(|e| {
                (
                    world.get::<Position>(e).unwrap().value,
                    world.get::<Sprite>(e).unwrap().rotation,
                )
            })
            .collect()
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(layout(7), layout(7));
        assert_ne!(layout(7), layout(8));
    }

    #[test]
    fn scatter_respects_spread_and_count() {
        let mut world = World::new();
        let config = SimConfig {
            spawn_count: 25,
            spread: 0.25,
            ..SimConfig::new()
        };
        let mut rng = Rng::with_seed(1);
        let units = scatter_units(&mut world, &config, &mut rng);
        assert_eq!(units.len(), 25);
        for e in units {
            let p = world.get::<Position>(e).unwrap().value;
            assert!(p.x >= -0.25 && p.x < 0.25);
            assert!(p.y >= -0.25 && p.y < 0.25);
            assert_eq!(p.z, 0.0);
            assert!(world.get::<Velocity>(e).unwrap().is_zero());
        }
    }

    #[test]
    fn spawn_order_follows_creation() {
        let mut world = World::new();
        let lone = spawn_unit(&mut world, Vec3::ZERO, Vec3::ZERO);
        let config = SimConfig {
            spawn_count: 3,
            ..SimConfig::new()
        };
        let mut rng = Rng::with_seed(5);
        let scattered = scatter_units(&mut world, &config, &mut rng);
        let last = spawn_unit(&mut world, Vec3::ZERO, Vec3::ZERO);

        let orders: Vec<u64> = std::iter::once(lone)
            .chain(scattered)
            .chain(std::iter::once(last))
            .map(|e| world.get::<SpawnOrder>(e).unwrap().0)
            .collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn initial_speed_gives_heading() {
        let mut world = World::new();
        let config = SimConfig {
            spawn_count: 5,
            initial_speed: 0.2,
            ..SimConfig::new()
        };
        let mut rng = Rng::with_seed(3);
        for e in scatter_units(&mut world, &config, &mut rng) {
            let v = world.get::<Velocity>(e).unwrap().value;
            assert!((v.length() - 0.2).abs() < 1e-5);
            assert_eq!(v.z, 0.0);
        }
    }
}
