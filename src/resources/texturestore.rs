//! Texture store resource.
//!
//! Owns every loaded raylib texture keyed by a string ID. Sprite sheets refer
//! to their atlas by key so the simulation never touches GPU handles.

use std::path::Path;

use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::resources::spritesheet::TextureLoader;

/// Map of texture keys to loaded textures.
///
/// Raylib textures must be used from the main thread only.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

/// [`TextureLoader`] that loads images through raylib into a [`TextureStore`].
pub struct RaylibTextureLoader<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub store: &'a mut TextureStore,
}

impl TextureLoader for RaylibTextureLoader<'_> {
    fn load_texture(&mut self, key: &str, path: &Path) -> Result<(), String> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Non UTF-8 texture path: {}", path.display()))?;
        let texture = self
            .rl
            .load_texture(self.thread, path_str)
            .map_err(|e| format!("Failed to load texture {}: {}", path.display(), e))?;
        info!("Loaded texture '{}' from {}", key, path.display());
        self.store.insert(key, texture);
        Ok(())
    }
}
