//! Texture handles keyed by opaque string ids.
//!
//! The engine never touches pixel data. An external [`TextureLoader`] turns a
//! key into a [`TextureHandle`] (or fails), and the store caches the result so
//! the render pass can resolve sprites every frame.

use bevy_ecs::prelude::Resource;
use log::{debug, error};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Opaque handle issued by the external renderer for a loaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TextureHandle(pub u32);

/// Resource-loading collaborator.
pub trait TextureLoader {
    /// Load the texture identified by `key`, or `None` if it cannot be loaded.
    fn load(&mut self, key: &str) -> Option<TextureHandle>;
}

impl<F> TextureLoader for F
where
    F: FnMut(&str) -> Option<TextureHandle>,
{
    fn load(&mut self, key: &str) -> Option<TextureHandle> {
        self(key)
    }
}

#[derive(Resource, Debug, Default)]
pub struct TextureStore {
    map: FxHashMap<String, TextureHandle>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `key` through `loader` unless it is already cached.
    ///
    /// Returns whether the key is resolvable afterwards. Failures are logged
    /// and leave the store untouched.
    pub fn load(&mut self, key: &str, loader: &mut dyn TextureLoader) -> bool {
        if self.map.contains_key(key) {
            debug!("Texture '{}' already loaded", key);
            return true;
        }
        match loader.load(key) {
            Some(handle) => {
                self.map.insert(key.to_string(), handle);
                true
            }
            None => {
                error!("Unable to load texture '{}'", key);
                false
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, handle: TextureHandle) {
        self.map.insert(key.into(), handle);
    }

    pub fn get(&self, key: &str) -> Option<TextureHandle> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
