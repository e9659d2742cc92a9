/// Vertex-colored UV sphere.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::graphics_device::{DrawCall, GraphicsDevice, ShaderKey};
use crate::resource::geometry::sphere_vertices;
use super::mesh_slot::MeshSlot;
use super::{model_view, Drawable};

const RINGS: u32 = 12;
const SEGMENTS: u32 = 16;
const TOP_COLOR: [f32; 3] = [1.0, 0.85, 0.2];
const BOTTOM_COLOR: [f32; 3] = [0.8, 0.1, 0.1];

pub struct Sphere {
    position: Vec3,
    shader: ShaderKey,
    mesh: MeshSlot,
}

impl Sphere {
    /// Sphere of diameter `size`; `shader` is the vertex-color program
    pub fn new(position: Vec3, size: f32, shader: ShaderKey) -> Self {
        Self {
            position,
            shader,
            mesh: MeshSlot::new(
                "sphere",
                sphere_vertices(size, RINGS, SEGMENTS, TOP_COLOR, BOTTOM_COLOR),
            ),
        }
    }
}

impl Drawable for Sphere {
    fn kind(&self) -> &'static str {
        "sphere"
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
