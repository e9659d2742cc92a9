/// Interleaved vertex layout shared by every primitive and both shaders.

use bytemuck::{Pod, Zeroable};

/// Position, color and texture coordinates (32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Byte stride of one vertex in a vertex buffer
    pub const STRIDE: u64 = std::mem::size_of::<Vertex>() as u64;

    pub const fn new(position: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, color, uv }
    }

    /// Untextured vertex
    pub const fn colored(position: [f32; 3], color: [f32; 3]) -> Self {
        Self::new(position, color, [0.0, 0.0])
    }

    /// Textured vertex, color left white
    pub const fn textured(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self::new(position, [1.0, 1.0, 1.0], uv)
    }
}
