/// Horizontal textured plane, used as the ground.

use std::sync::Arc;
use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::{DrawCall, GraphicsDevice, ShaderKey};
use crate::resource::geometry::plane_vertices;
use crate::resource::Texture;
use super::mesh_slot::MeshSlot;
use super::{model_view, Drawable};

pub struct Plane {
    position: Vec3,
    shader: ShaderKey,
    texture: Arc<Texture>,
    mesh: MeshSlot,
}

impl Plane {
    /// Plane of `width` x `depth` centred on `position`, texture tiled
    /// `repeat_width` x `repeat_depth` times
    pub fn new(
        position: Vec3,
        width: f32,
        depth: f32,
        repeat_width: f32,
        repeat_depth: f32,
        shader: ShaderKey,
        texture: Arc<Texture>,
    ) -> Self {
        Self {
            position,
            shader,
            texture,
            mesh: MeshSlot::new("plane", plane_vertices(width, depth, repeat_width, repeat_depth)),
        }
    }
}

impl Drawable for Plane {
    fn kind(&self) -> &'static str {
        "plane"
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
