/// Per-frame transform storage
///
/// Each recorded draw gets one aligned slot in a uniform buffer; the render
/// pass selects it with a dynamic offset. The buffer grows when a frame
/// records more draws than it has slots.

use bytemuck::{Pod, Zeroable};
use cubefield_engine::cubefield::graphics_device::DrawCall;

/// Matrices for one draw, as the shaders read them
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub(crate) struct Transforms {
    projection: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
}

impl Transforms {
    pub(crate) fn of(call: &DrawCall) -> Self {
        Self {
            projection: call.projection.to_cols_array_2d(),
            model_view: call.model_view.to_cols_array_2d(),
        }
    }
}

pub(crate) const TRANSFORMS_SIZE: u64 = std::mem::size_of::<Transforms>() as u64;

const INITIAL_SLOTS: u64 = 256;

/// Round `value` up to a multiple of `alignment` (a power of two)
pub(crate) fn align_up(value: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    value.div_ceil(alignment) * alignment
}

pub(crate) struct TransformRing {
    buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    stride: u64,
    slots: u64,
    staging: Vec<u8>,
}

impl TransformRing {
    pub(crate) fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = align_up(TRANSFORMS_SIZE, alignment);
        let (buffer, bind_group) = Self::allocate(device, layout, stride * INITIAL_SLOTS);
        Self {
            buffer,
            bind_group,
            stride,
            slots: INITIAL_SLOTS,
            staging: Vec::new(),
        }
    }

    fn allocate(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, size: u64) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cubefield_transforms"),
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cubefield_transforms"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(TRANSFORMS_SIZE),
                }),
            }],
        });
        (buffer, bind_group)
    }

    /// Write one slot per draw, growing the buffer first if needed
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        draws: &[DrawCall],
    ) {
        if draws.is_empty() {
            return;
        }
        let needed = draws.len() as u64;
        if needed > self.slots {
            let slots = needed.next_power_of_two();
            let (buffer, bind_group) = Self::allocate(device, layout, self.stride * slots);
            self.buffer.destroy();
            self.buffer = buffer;
            self.bind_group = bind_group;
            self.slots = slots;
        }

        self.staging.clear();
        self.staging.resize((self.stride * needed) as usize, 0);
        for (slot, call) in self.staging.chunks_exact_mut(self.stride as usize).zip(draws) {
            slot[..TRANSFORMS_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&Transforms::of(call)));
        }
        queue.write_buffer(&self.buffer, 0, &self.staging);
    }

    /// Dynamic offset of the slot for draw `index`
    pub(crate) fn offset(&self, index: usize) -> u32 {
        (self.stride * index as u64) as u32
    }
}
