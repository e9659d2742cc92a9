use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, MeshDesc, MeshKey, Vertex};

/// CPU vertices plus the device mesh they were uploaded to, if any
#[derive(Debug)]
pub(crate) struct MeshSlot {
    name: &'static str,
    vertices: Vec<Vertex>,
    mesh: Option<MeshKey>,
}

impl MeshSlot {
    pub(crate) fn new(name: &'static str, vertices: Vec<Vertex>) -> Self {
        Self {
            name,
            vertices,
            mesh: None,
        }
    }

    /// Upload, destroying any earlier upload first
    pub(crate) fn load(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        if let Some(previous) = self.mesh.take() {
            device.destroy_mesh(previous);
        }
        self.mesh = Some(device.create_mesh(&MeshDesc {
            name: self.name,
            vertices: &self.vertices,
        })?);
        Ok(())
    }

    pub(crate) fn release(&mut self, device: &mut dyn GraphicsDevice) {
        if let Some(mesh) = self.mesh.take() {
            device.destroy_mesh(mesh);
        }
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.mesh.is_some()
    }

    pub(crate) fn key(&self) -> Result<MeshKey> {
        self.mesh
            .ok_or_else(|| Error::InvalidResource(format!("{} drawn before it was loaded", self.name)))
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
