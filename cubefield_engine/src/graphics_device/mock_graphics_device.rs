/// Mock graphics device (no GPU required)
///
/// Records every created resource and draw call so tests and headless tools
/// can run a scene without a window. Failures can be injected per shader
/// or texture name, and for draw/present.

use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use super::graphics_device::{
    DrawCall, FrameStats, GraphicsDevice, MeshDesc, MeshKey, ShaderDesc, ShaderKey,
    TextureDesc, TextureKey,
};

#[derive(Debug, Clone)]
pub struct MockShader {
    pub name: String,
    pub textured: bool,
}

#[derive(Debug, Clone)]
pub struct MockTexture {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct MockMesh {
    pub name: String,
    pub vertex_count: u32,
}

#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    pub shaders: SlotMap<ShaderKey, MockShader>,
    pub textures: SlotMap<TextureKey, MockTexture>,
    pub meshes: SlotMap<MeshKey, MockMesh>,
    /// Draw calls recorded since the current frame began
    pub draws: Vec<DrawCall>,
    /// Number of frames presented
    pub frames_presented: u64,
    /// Every mesh ever destroyed, by name
    pub destroyed_meshes: Vec<String>,
    pub failing_shaders: FxHashSet<String>,
    pub failing_textures: FxHashSet<String>,
    pub fail_draws: bool,
    pub fail_present: bool,
    in_frame: bool,
    width: u32,
    height: u32,
}

impl MockGraphicsDevice {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Make `create_shader` fail for this shader name
    pub fn fail_shader(&mut self, name: &str) {
        self.failing_shaders.insert(name.to_string());
    }

    /// Make `create_texture` fail for this texture name
    pub fn fail_texture(&mut self, name: &str) {
        self.failing_textures.insert(name.to_string());
    }

    pub fn is_in_frame(&self) -> bool {
        self.in_frame
    }

    /// Count of live GPU resources of every kind
    pub fn live_resources(&self) -> usize {
        self.shaders.len() + self.textures.len() + self.meshes.len()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<ShaderKey> {
        if self.failing_shaders.contains(desc.name) {
            return Err(Error::ShaderCompilation {
                shader: desc.name.to_string(),
                reason: "rejected by mock device".to_string(),
            });
        }
        Ok(self.shaders.insert(MockShader {
            name: desc.name.to_string(),
            textured: desc.textured,
        }))
    }

    fn destroy_shader(&mut self, key: ShaderKey) {
        self.shaders.remove(key);
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<TextureKey> {
        if self.failing_textures.contains(desc.name) {
            return Err(Error::BackendError(format!("texture '{}' rejected by mock device", desc.name)));
        }
        if desc.rgba.len() != (desc.width as usize) * (desc.height as usize) * 4 {
            return Err(Error::InvalidResource(format!("texture '{}' has a wrong pixel count", desc.name)));
        }
        Ok(self.textures.insert(MockTexture {
            name: desc.name.to_string(),
            width: desc.width,
            height: desc.height,
        }))
    }

    fn destroy_texture(&mut self, key: TextureKey) {
        self.textures.remove(key);
    }

    fn create_mesh(&mut self, desc: &MeshDesc) -> Result<MeshKey> {
        if desc.vertices.is_empty() {
            return Err(Error::InvalidResource(format!("mesh '{}' has no vertices", desc.name)));
        }
        Ok(self.meshes.insert(MockMesh {
            name: desc.name.to_string(),
            vertex_count: desc.vertices.len() as u32,
        }))
    }

    fn destroy_mesh(&mut self, key: MeshKey) {
        if let Some(mesh) = self.meshes.remove(key) {
            self.destroyed_meshes.push(mesh.name);
        }
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.draws.clear();
        self.in_frame = true;
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError("draw outside of a frame".to_string()));
        }
        if self.fail_draws {
            return Err(Error::BackendError("draw rejected by mock device".to_string()));
        }
        let shader = self
            .shaders
            .get(call.shader)
            .ok_or_else(|| Error::InvalidResource("unknown shader".to_string()))?;
        if !self.meshes.contains_key(call.mesh) {
            return Err(Error::InvalidResource("unknown mesh".to_string()));
        }
        match call.texture {
            Some(texture) if !self.textures.contains_key(texture) => {
                return Err(Error::InvalidResource("unknown texture".to_string()));
            }
            None if shader.textured => {
                return Err(Error::InvalidResource(format!(
                    "shader '{}' needs a texture",
                    shader.name
                )));
            }
            _ => {}
        }
        self.draws.push(*call);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<FrameStats> {
        if !self.in_frame {
            return Err(Error::BackendError("end_frame without begin_frame".to_string()));
        }
        self.in_frame = false;
        if self.fail_present {
            return Err(Error::BackendError("present rejected by mock device".to_string()));
        }
        self.frames_presented += 1;
        let vertices = self
            .draws
            .iter()
            .filter_map(|call| self.meshes.get(call.mesh))
            .map(|mesh| mesh.vertex_count as u64)
            .sum();
        Ok(FrameStats {
            draw_calls: self.draws.len() as u32,
            vertices,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
