/// Cube with one flat color per face.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::{DrawCall, GraphicsDevice, ShaderKey};
use crate::resource::geometry::cube_vertices;
use super::mesh_slot::MeshSlot;
use super::{model_view, Drawable};

pub struct Cube {
    position: Vec3,
    shader: ShaderKey,
    mesh: MeshSlot,
}

impl Cube {
    /// `shader` is the vertex-color program
    pub fn new(position: Vec3, size: f32, shader: ShaderKey) -> Self {
        Self {
            position,
            shader,
            mesh: MeshSlot::new("cube", cube_vertices(size)),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}

impl Drawable for Cube {
    fn kind(&self) -> &'static str {
        "cube"
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
            texture: None,
            projection: *projection,
            model_view: model_view(view, self.position),
        })
    }

    fn release(&mut self, device: &mut dyn GraphicsDevice) {
        self.mesh.release(device);
    }
}
