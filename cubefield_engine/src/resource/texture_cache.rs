/// Shared texture pool.
///
/// Drawables that use the same image share one GPU texture. The cache is an
/// ordinary value owned by the scene, so teardown order is explicit:
/// `release_all` destroys every texture on the device it was created on.

use std::path::Path;
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use super::texture::{decode_image, DecodedImage, Texture};

#[derive(Debug, Default)]
pub struct TextureCache {
    textures: FxHashMap<String, Arc<Texture>>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for an image file, decoding and uploading it on first use
    pub fn get_or_load(&mut self, device: &mut dyn GraphicsDevice, path: &Path) -> Result<Arc<Texture>> {
        let name = path.display().to_string();
        if let Some(texture) = self.textures.get(&name) {
            return Ok(texture.clone());
        }
        let image = decode_image(path)?;
        self.insert(device, &name, &image)
    }

    /// Texture for already decoded pixels, uploading them on first use
    pub fn get_or_insert(
        &mut self,
        device: &mut dyn GraphicsDevice,
        name: &str,
        image: &DecodedImage,
    ) -> Result<Arc<Texture>> {
        if let Some(texture) = self.textures.get(name) {
            return Ok(texture.clone());
        }
        self.insert(device, name, image)
    }

    fn insert(&mut self, device: &mut dyn GraphicsDevice, name: &str, image: &DecodedImage) -> Result<Arc<Texture>> {
        let texture = Arc::new(Texture::upload(device, name, image)?);
        crate::engine_debug!(
            "cubefield::TextureCache",
            "Loaded texture '{}' ({}x{})",
            name, texture.width(), texture.height()
        );
        self.textures.insert(name.to_string(), texture.clone());
        Ok(texture)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Texture>> {
        self.textures.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Number of holders of a texture, the cache included
    pub fn use_count(&self, name: &str) -> usize {
        self.textures.get(name).map_or(0, Arc::strong_count)
    }

    /// One line per texture: `name (users)`, sorted by name
    pub fn describe(&self) -> String {
        let mut lines: Vec<String> = self
            .textures
            .iter()
            .map(|(name, texture)| format!("{} ({} users)", name, Arc::strong_count(texture) - 1))
            .collect();
        lines.sort();
        lines.join("\n")
    }

    /// Destroy every cached texture on the device
    pub fn release_all(&mut self, device: &mut dyn GraphicsDevice) {
        for (name, texture) in self.textures.drain() {
            if Arc::strong_count(&texture) > 1 {
                crate::engine_warn!(
                    "cubefield::TextureCache",
                    "Releasing texture '{}' still held by {} users",
                    name,
                    Arc::strong_count(&texture) - 1
                );
            }
            device.destroy_texture(texture.key());
        }
    }
}

#[cfg(test)]
#[path = "texture_cache_tests.rs"]
mod tests;
