/// Mesh - vertex buffer holding one non-indexed triangle list

use wgpu::util::DeviceExt;
use cubefield_engine::cubefield::{Error, Result};
use cubefield_engine::cubefield::graphics_device::{MeshDesc, Vertex};

const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x2,
];

/// Buffer layout matching [`Vertex`]: position, color, uv
pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: Vertex::STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

pub(crate) struct Mesh {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

impl Mesh {
    pub(crate) fn upload(device: &wgpu::Device, desc: &MeshDesc) -> Result<Self> {
        if desc.vertices.is_empty() {
            return Err(Error::InvalidResource(format!("mesh '{}' has no vertices", desc.name)));
        }
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(desc.name),
            contents: bytemuck::cast_slice(desc.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Ok(Self {
            buffer,
            vertex_count: desc.vertices.len() as u32,
        })
    }
}
