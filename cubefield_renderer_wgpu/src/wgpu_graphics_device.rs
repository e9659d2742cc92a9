/// WgpuGraphicsDevice - wgpu implementation of the GraphicsDevice trait
///
/// Resources live in slotmaps keyed by the engine's handle types. Draw calls
/// are validated when recorded and encoded into one render pass by
/// `end_frame`, which then presents the surface texture.

use std::sync::Arc;
use slotmap::SlotMap;
use winit::window::Window;
use cubefield_engine::cubefield::{Error, Result};
use cubefield_engine::cubefield::graphics_device::{
    DrawCall, FrameStats, GraphicsDevice, MeshDesc, MeshKey, ShaderDesc, ShaderKey,
    TextureDesc, TextureKey,
};
use cubefield_engine::{engine_debug, engine_warn};
use crate::wgpu_context::WgpuContext;
use crate::wgpu_frame::TransformRing;
use crate::wgpu_mesh::Mesh;
use crate::wgpu_shader::{Layouts, Shader};
use crate::wgpu_texture::{create_repeat_sampler, Texture};

const SOURCE: &str = "cubefield::wgpu::Device";

/// Backend options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WgpuConfig {
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Background color (linear RGBA)
    pub clear_color: [f64; 4],
}

impl Default for WgpuConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

pub struct WgpuGraphicsDevice {
    context: WgpuContext,
    layouts: Layouts,
    sampler: wgpu::Sampler,
    transforms: TransformRing,
    shaders: SlotMap<ShaderKey, Shader>,
    textures: SlotMap<TextureKey, Texture>,
    meshes: SlotMap<MeshKey, Mesh>,
    draws: Vec<DrawCall>,
    in_frame: bool,
    clear_color: wgpu::Color,
}

impl WgpuGraphicsDevice {
    /// Create a device presenting to `window`
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` when no adapter, device or surface
    /// format is available.
    pub fn new(window: Arc<Window>, config: WgpuConfig) -> Result<Self> {
        let context = WgpuContext::new(window, config.vsync)?;
        let layouts = Layouts::new(&context.device);
        let sampler = create_repeat_sampler(&context.device);
        let transforms = TransformRing::new(&context.device, &layouts.transforms);
        let [r, g, b, a] = config.clear_color;

        Ok(Self {
            context,
            layouts,
            sampler,
            transforms,
            shaders: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            meshes: SlotMap::with_key(),
            draws: Vec::new(),
            in_frame: false,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    /// Name of the GPU in use
    pub fn adapter_name(&self) -> &str {
        self.context.adapter_name()
    }

    /// Live resources per kind: (shaders, textures, meshes)
    pub fn resource_counts(&self) -> (usize, usize, usize) {
        (self.shaders.len(), self.textures.len(), self.meshes.len())
    }

    /// Next surface texture, reconfiguring once if the surface went stale
    fn acquire(&mut self) -> Result<wgpu::SurfaceTexture> {
        match self.context.surface.get_current_texture() {
            Ok(output) => Ok(output),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                engine_warn!(SOURCE, "Surface lost or outdated, reconfiguring");
                self.context.reconfigure();
                self.context
                    .surface
                    .get_current_texture()
                    .map_err(|e| Error::BackendError(format!("cannot acquire surface texture: {}", e)))
            }
            Err(e) => Err(Error::BackendError(format!("cannot acquire surface texture: {}", e))),
        }
    }

    fn encode(&self, view: &wgpu::TextureView) -> (wgpu::CommandBuffer, FrameStats) {
        let mut stats = FrameStats::default();
        let mut encoder = self.context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("cubefield_frame"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cubefield_main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            for (index, call) in self.draws.iter().enumerate() {
                // Resources destroyed after the draw was recorded are skipped
                let (Some(shader), Some(mesh)) = (self.shaders.get(call.shader), self.meshes.get(call.mesh)) else {
                    continue;
                };
                pass.set_pipeline(&shader.pipeline);
                pass.set_bind_group(0, &self.transforms.bind_group, &[self.transforms.offset(index)]);
                if shader.textured {
                    let Some(texture) = call.texture.and_then(|key| self.textures.get(key)) else {
                        continue;
                    };
                    pass.set_bind_group(1, &texture.bind_group, &[]);
                }
                pass.set_vertex_buffer(0, mesh.buffer.slice(..));
                pass.draw(0..mesh.vertex_count, 0..1);

                stats.draw_calls += 1;
                stats.vertices += mesh.vertex_count as u64;
            }
        }

        (encoder.finish(), stats)
    }
}

impl GraphicsDevice for WgpuGraphicsDevice {
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<ShaderKey> {
        let shader = Shader::compile(
            &self.context.device,
            &self.layouts,
            self.context.surface_format(),
            desc,
        )?;
        engine_debug!(SOURCE, "Created pipeline '{}' (textured: {})", desc.name, desc.textured);
        Ok(self.shaders.insert(shader))
    }

    fn destroy_shader(&mut self, key: ShaderKey) {
        self.shaders.remove(key);
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<TextureKey> {
        let texture = Texture::upload(
            &self.context.device,
            &self.context.queue,
            &self.layouts.texture,
            &self.sampler,
            desc,
        )?;
        Ok(self.textures.insert(texture))
    }

    fn destroy_texture(&mut self, key: TextureKey) {
        if let Some(texture) = self.textures.remove(key) {
            texture.texture.destroy();
        }
    }

    fn create_mesh(&mut self, desc: &MeshDesc) -> Result<MeshKey> {
        let mesh = Mesh::upload(&self.context.device, desc)?;
        Ok(self.meshes.insert(mesh))
    }

    fn destroy_mesh(&mut self, key: MeshKey) {
        if let Some(mesh) = self.meshes.remove(key) {
            mesh.buffer.destroy();
        }
    }

    fn begin_frame(&mut self) -> Result<()> {
        if self.in_frame {
            return Err(Error::BackendError("begin_frame called twice".to_string()));
        }
        self.draws.clear();
        self.in_frame = true;
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError("draw outside of a frame".to_string()));
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
                return Err(Error::InvalidResource("textured shader drawn without a texture".to_string()));
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
        if self.context.is_minimized() {
            return Ok(FrameStats::default());
        }

        let output = self.acquire()?;
        self.transforms.upload(
            &self.context.device,
            &self.context.queue,
            &self.layouts.transforms,
            &self.draws,
        );

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let (commands, stats) = self.encode(&view);
        self.context.queue.submit(std::iter::once(commands));
        self.context.window().pre_present_notify();
        output.present();
        Ok(stats)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }
}
