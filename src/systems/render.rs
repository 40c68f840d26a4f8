//! Render dispatch.
//!
//! These systems never draw anything themselves. They translate ECS state into
//! [`DrawCall`]s on the [`DrawQueue`] for the external renderer, one call per
//! entity per frame, no batching. The only state they mutate is dropping a
//! [`Sprite`] whose texture cannot be resolved.
use bevy_ecs::prelude::*;
use glam::{Mat4, Vec3};
use log::warn;
use serde::Serialize;

use crate::components::job::Job;
use crate::components::position::Position;
use crate::components::selection::Selection;
use crate::components::spawnorder::SpawnOrder;
use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::drawqueue::{DrawCall, DrawQueue, Highlight, SELECTION_BOX_COLOR};
use crate::resources::selectionregion::SelectionRegion;
use crate::resources::texturestore::TextureStore;

/// Submit one textured quad per sprite, tinted by its tags.
///
/// Sprites whose texture key is unknown to the [`TextureStore`] are removed
/// from their entity and skipped.
pub fn entity_render_system(
    textures: Res<TextureStore>,
    mut draws: ResMut<DrawQueue>,
    query: Query<(
        Entity,
        &SpawnOrder,
        &Position,
        &Sprite,
        Has<Selection>,
        Has<Job>,
    )>,
    mut commands: Commands,
) {
    let mut visible: Vec<_> = query.iter().collect();
    visible.sort_by_key(|(_, order, ..)| **order);

    for (entity, _, position, sprite, selected, working) in visible {
        let Some(texture) = textures.get(&sprite.texture) else {
            warn!("No texture found for '{}', removing sprite", sprite.texture);
            commands.entity(entity).remove::<Sprite>();
            continue;
        };
        let highlight = Highlight { selected, working };
        draws.submit(DrawCall::Sprite {
            entity,
            texture,
            transform: sprite.transform(position.value),
            color: highlight.color(),
        });
    }
}

/// Submit the selection rectangle while a drag is active.
pub fn selection_box_render_system(region: Res<SelectionRegion>, mut draws: ResMut<DrawQueue>) {
    if region.is_selecting() {
        draws.submit(DrawCall::SelectionBox {
            rect: region.current.rect,
            color: SELECTION_BOX_COLOR,
        });
    }
}

/// Submit a point for every positioned entity when debug mode is on.
pub fn debug_render_system(
    debug_mode: Option<Res<DebugMode>>,
    mut draws: ResMut<DrawQueue>,
    query: Query<(&SpawnOrder, &Position)>,
) {
    if debug_mode.is_none() {
        return;
    }
    let mut points: Vec<_> = query.iter().collect();
    points.sort_by_key(|(order, _)| **order);
    for (_, position) in points {
        draws.submit(DrawCall::Point {
            position: position.value,
        });
    }
}

/// Transform and texture key of a renderable sprite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteTransform {
    pub texture: String,
    pub transform: Mat4,
}

/// Render-facing view of one positioned entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Renderable {
    #[serde(skip)]
    pub entity: Entity,
    pub position: Vec3,
    pub sprite: Option<SpriteTransform>,
    pub highlight: Highlight,
}

/// Snapshot every positioned entity in spawn order, for renderers that want
/// to do their own dispatch.
pub fn collect_renderables(world: &mut World) -> Vec<Renderable> {
    let mut query = world.query::<(
        Entity,
        &SpawnOrder,
        &Position,
        Option<&Sprite>,
        Has<Selection>,
        Has<Job>,
    )>();
    let mut renderables: Vec<(SpawnOrder, Renderable)> = query
        .iter(world)
        .map(|(entity, order, position, sprite, selected, working)| {
            (
                *order,
                Renderable {
                    entity,
                    position: position.value,
                    sprite: sprite.map(|s| SpriteTransform {
                        texture: s.texture.clone(),
                        transform: s.transform(position.value),
                    }),
                    highlight: Highlight { selected, working },
                },
            )
        })
        .collect();
    renderables.sort_by_key(|(order, _)| *order);
    renderables.into_iter().map(|(_, r)| r).collect()
}
