use bevy_ecs::prelude::Component;
use glam::{Mat4, Quat, Vec3};

/// Sprite is identified by a texture key, a uniform scale and a rotation
/// around the z axis in radians.
///
/// The texture key is opaque to the engine; it is resolved every frame
/// through the [`TextureStore`](crate::resources::texturestore::TextureStore).
/// A sprite whose key cannot be resolved is removed from its entity.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub texture: String,
    pub scale: f32,
    pub rotation: f32,
}

impl Sprite {
    pub fn new(texture: impl Into<String>, scale: f32, rotation: f32) -> Self {
        Self {
            texture: texture.into(),
            scale,
            rotation,
        }
    }

    /// Model matrix: translate to `position`, rotate around z, then scale.
    pub fn transform(&self, position: Vec3) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_z(self.rotation),
            position,
        )
    }
}
