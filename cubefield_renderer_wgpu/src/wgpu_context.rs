/// WgpuContext - instance, surface, device and queue for one window

use std::sync::Arc;
use winit::window::Window;
use cubefield_engine::cubefield::{Error, Result};
use cubefield_engine::{engine_debug, engine_err, engine_info};

const SOURCE: &str = "cubefield::wgpu::Context";

/// Depth buffer format shared by every pipeline
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub(crate) struct WgpuContext {
    pub(crate) surface: wgpu::Surface<'static>,
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
    pub(crate) config: wgpu::SurfaceConfiguration,
    pub(crate) depth_view: wgpu::TextureView,
    adapter_name: String,
    /// Window size is zero; nothing can be presented
    minimized: bool,
    window: Arc<Window>,
}

impl WgpuContext {
    pub(crate) fn new(window: Arc<Window>, vsync: bool) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone()).map_err(|e| {
            engine_err!(SOURCE, Error::InitializationFailed(format!("cannot create surface: {}", e)))
        })?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| {
            engine_err!(
                SOURCE,
                Error::InitializationFailed("no GPU adapter can present to this window".to_string())
            )
        })?;
        let info = adapter.get_info();

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubefield_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .map_err(|e| {
            engine_err!(SOURCE, Error::InitializationFailed(format!("cannot create device: {}", e)))
        })?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or_else(|| {
                engine_err!(
                    SOURCE,
                    Error::InitializationFailed(format!("surface has no format on {}", info.name))
                )
            })?;

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, config.width, config.height);

        engine_info!(
            SOURCE,
            "GPU initialized: {} ({} backend), surface {:?} {}x{}",
            info.name,
            info.backend.to_str(),
            format,
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            adapter_name: info.name,
            minimized: size.width == 0 || size.height == 0,
            window,
        })
    }

    /// Reconfigure the surface and depth buffer for a new window size
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.minimized = width == 0 || height == 0;
        if self.minimized {
            engine_debug!(SOURCE, "Window minimized, presentation paused");
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
    }

    /// Apply the current configuration again (after a lost surface)
    pub(crate) fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.config.width, self.config.height);
        engine_debug!(SOURCE, "Surface configured {}x{}", self.config.width, self.config.height);
    }

    pub(crate) fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub(crate) fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub(crate) fn adapter_name(&self) -> &str {
        &self.adapter_name
    }

    pub(crate) fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cubefield_depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
