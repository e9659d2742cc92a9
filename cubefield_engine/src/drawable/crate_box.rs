/// Textured cube ("crate"); the texture is shared through the texture cache.

use std::sync::Arc;
use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::{DrawCall, GraphicsDevice, ShaderKey};
use crate::resource::geometry::crate_vertices;
use crate::resource::Texture;
use super::mesh_slot::MeshSlot;
use super::{model_view, Drawable};

pub struct Crate {
    position: Vec3,
    shader: ShaderKey,
    texture: Arc<Texture>,
    mesh: MeshSlot,
}

impl Crate {
    /// `shader` is the textured program
    pub fn new(position: Vec3, size: f32, shader: ShaderKey, texture: Arc<Texture>) -> Self {
        Self {
            position,
            shader,
            texture,
            mesh: MeshSlot::new("crate", crate_vertices(size)),
        }
    }

    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }
}

impl Drawable for Crate {
    fn kind(&self) -> &'static str {
        "crate"
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn load(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.mesh.load(device)
    }

    fn is_loaded(&self) -> bool {
        self.mesh.is_loaded()
    }

    fn draw(&self, device: &mut dyn GraphicsDevice, projection: &Mat4, view: &Mat4) -> Result<()> {
        device.draw(&DrawCall {
            shader: self.shader,
            mesh: self.mesh.key()?,
            texture: Some(self.texture.key()),
            projection: *projection,
            model_view: model_view(view, self.position),
        })
    }

    fn release(&mut self, device: &mut dyn GraphicsDevice) {
        self.mesh.release(device);
    }
}
