/// Shader programs loaded from a directory of `<name>.wgsl` files.

use std::path::{Path, PathBuf};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, ShaderDesc, ShaderKey};

/// Vertex colors only
pub const COLOR_SHADER: &str = "color";
/// Texture sampled with the vertex uv
pub const TEXTURE_SHADER: &str = "texture";

#[derive(Debug)]
pub struct ShaderLibrary {
    directory: PathBuf,
    shaders: FxHashMap<String, ShaderKey>,
}

impl ShaderLibrary {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            shaders: FxHashMap::default(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the source file for a shader name
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.wgsl", name))
    }

    /// Load and compile `<directory>/<name>.wgsl`, once per name
    ///
    /// # Errors
    ///
    /// `Error::ResourceLoad` when the file cannot be read,
    /// `Error::ShaderCompilation` when the device rejects it.
    pub fn load(&mut self, device: &mut dyn GraphicsDevice, name: &str, textured: bool) -> Result<ShaderKey> {
        if let Some(key) = self.shaders.get(name) {
            return Ok(*key);
        }
        let path = self.source_path(name);
        let source = std::fs::read_to_string(&path).map_err(|err| Error::ResourceLoad {
            resource: path.display().to_string(),
            reason: err.to_string(),
        })?;
        self.compile(device, name, &source, textured)
    }

    /// Compile a shader from source text and register it under `name`
    pub fn compile(
        &mut self,
        device: &mut dyn GraphicsDevice,
        name: &str,
        source: &str,
        textured: bool,
    ) -> Result<ShaderKey> {
        let key = device.create_shader(&ShaderDesc { name, source, textured })?;
        crate::engine_debug!("cubefield::ShaderLibrary", "Compiled shader '{}'", name);
        if let Some(previous) = self.shaders.insert(name.to_string(), key) {
            device.destroy_shader(previous);
        }
        Ok(key)
    }

    pub fn get(&self, name: &str) -> Option<ShaderKey> {
        self.shaders.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }

    /// Destroy every shader on the device
    pub fn release_all(&mut self, device: &mut dyn GraphicsDevice) {
        for (_, key) in self.shaders.drain() {
            device.destroy_shader(key);
        }
    }
}
