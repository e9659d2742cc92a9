/// Shader - one render pipeline per shader program
///
/// Every program reads its matrices from bind group 0 (dynamic offset);
/// textured programs also sample a texture and sampler from bind group 1.

use cubefield_engine::cubefield::{Error, Result};
use cubefield_engine::cubefield::graphics_device::ShaderDesc;
use crate::wgpu_context::DEPTH_FORMAT;
use crate::wgpu_frame::TRANSFORMS_SIZE;
use crate::wgpu_mesh::vertex_layout;

/// Bind group and pipeline layouts shared by every program
pub(crate) struct Layouts {
    pub(crate) transforms: wgpu::BindGroupLayout,
    pub(crate) texture: wgpu::BindGroupLayout,
    color_pipeline: wgpu::PipelineLayout,
    textured_pipeline: wgpu::PipelineLayout,
}

impl Layouts {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let transforms = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cubefield_transforms_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(TRANSFORMS_SIZE),
                },
                count: None,
            }],
        });

        let texture = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cubefield_texture_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let color_pipeline = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cubefield_color_pipeline_layout"),
            bind_group_layouts: &[&transforms],
            push_constant_ranges: &[],
        });
        let textured_pipeline = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cubefield_textured_pipeline_layout"),
            bind_group_layouts: &[&transforms, &texture],
            push_constant_ranges: &[],
        });

        Self {
            transforms,
            texture,
            color_pipeline,
            textured_pipeline,
        }
    }
}

pub(crate) struct Shader {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) textured: bool,
}

impl Shader {
    /// Compile WGSL source into a pipeline
    ///
    /// Validation errors (WGSL syntax, missing entry points, layout
    /// mismatches) are caught through an error scope instead of the
    /// device's uncaptured error handler.
    pub(crate) fn compile(
        device: &wgpu::Device,
        layouts: &Layouts,
        surface_format: wgpu::TextureFormat,
        desc: &ShaderDesc,
    ) -> Result<Self> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.name),
            source: wgpu::ShaderSource::Wgsl(desc.source.into()),
        });

        let layout = if desc.textured {
            &layouts.textured_pipeline
        } else {
            &layouts.color_pipeline
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.name),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            // Planes are seen from both sides
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(Error::ShaderCompilation {
                shader: desc.name.to_string(),
                reason: error.to_string(),
            });
        }

        Ok(Self {
            pipeline,
            textured: desc.textured,
        })
    }
}
