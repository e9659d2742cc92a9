/*!
# Cubefield Engine - wgpu Backend

wgpu implementation of the Cubefield [`GraphicsDevice`](cubefield_engine::cubefield::graphics_device::GraphicsDevice).

One render pipeline per shader program, one vertex buffer per mesh and one
bind group per texture. Draw calls are recorded during the frame and encoded
into a single render pass when the frame ends; per-draw matrices live in a
dynamic-offset uniform buffer.
*/

mod wgpu_context;
mod wgpu_frame;
mod wgpu_mesh;
mod wgpu_shader;
mod wgpu_texture;
mod wgpu_graphics_device;

// Main cubefield namespace module
pub mod cubefield {
    pub use crate::wgpu_graphics_device::{WgpuConfig, WgpuGraphicsDevice};
}
