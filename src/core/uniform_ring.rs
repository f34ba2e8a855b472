use std::collections::HashMap;
use std::num::NonZeroU64;

use super::plan::{DrawCommand, Program};

const INITIAL_SLOTS: u64 = 32;

/// Distance between uniform slots: the largest program block rounded up to
/// the device's dynamic-offset alignment.
pub fn slot_stride(largest_uniform: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    largest_uniform.div_ceil(alignment) * alignment
}

/// Bind group layout for `program`: one dynamic-offset uniform block at binding 0.
pub fn bind_group_layout(device: &wgpu::Device, program: Program) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(&format!("{} Uniforms Layout", program.label())),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: NonZeroU64::new(program.uniform_size()),
            },
            count: None,
        }],
    })
}

/// One uniform buffer holding every draw's uniforms for the current frame.
///
/// Each draw gets its own aligned slot, all written with a single
/// `write_buffer` before the frame is submitted, and is bound with a dynamic
/// offset into it.
pub struct UniformRing {
    buffer: wgpu::Buffer,
    stride: u64,
    capacity: u64,
    layouts: HashMap<Program, wgpu::BindGroupLayout>,
    bind_groups: HashMap<Program, wgpu::BindGroup>,
    staging: Vec<u8>,
}

impl UniformRing {
    pub fn new(device: &wgpu::Device) -> Self {
        let largest = Program::ALL
            .iter()
            .map(|p| p.uniform_size())
            .max()
            .unwrap_or(0);
        let stride = slot_stride(
            largest,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let layouts: HashMap<_, _> = Program::ALL
            .iter()
            .map(|&p| (p, bind_group_layout(device, p)))
            .collect();

        let buffer = Self::create_buffer(device, stride * INITIAL_SLOTS);
        let bind_groups = Self::create_bind_groups(device, &layouts, &buffer);

        Self {
            buffer,
            stride,
            capacity: INITIAL_SLOTS,
            layouts,
            bind_groups,
            staging: Vec::new(),
        }
    }

    pub fn layout(&self, program: Program) -> Option<&wgpu::BindGroupLayout> {
        self.layouts.get(&program)
    }

    pub fn bind_group(&self, program: Program) -> Option<&wgpu::BindGroup> {
        self.bind_groups.get(&program)
    }

    /// Write every draw's uniforms; returns each draw's dynamic offset.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        draws: &[DrawCommand],
    ) -> Vec<u32> {
        let needed = draws.len() as u64;
        if needed > self.capacity {
            self.grow(device, needed);
        }

        self.staging.clear();
        self.staging.resize((needed * self.stride) as usize, 0);
        let offsets = draws
            .iter()
            .enumerate()
            .map(|(i, draw)| {
                let offset = i as u64 * self.stride;
                let bytes = draw.uniforms.as_bytes();
                let start = offset as usize;
                self.staging[start..start + bytes.len()].copy_from_slice(bytes);
                offset as u32
            })
            .collect();

        if !self.staging.is_empty() {
            queue.write_buffer(&self.buffer, 0, &self.staging);
        }
        offsets
    }

    fn grow(&mut self, device: &wgpu::Device, needed: u64) {
        let capacity = needed.next_power_of_two();
        log::debug!("Growing uniform ring: {} -> {} slots", self.capacity, capacity);
        self.buffer = Self::create_buffer(device, self.stride * capacity);
        self.bind_groups = Self::create_bind_groups(device, &self.layouts, &self.buffer);
        self.capacity = capacity;
    }

    fn create_buffer(device: &wgpu::Device, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Draw Uniforms"),
            size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_bind_groups(
        device: &wgpu::Device,
        layouts: &HashMap<Program, wgpu::BindGroupLayout>,
        buffer: &wgpu::Buffer,
    ) -> HashMap<Program, wgpu::BindGroup> {
        layouts
            .iter()
            .map(|(&program, layout)| {
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("{} Uniforms", program.label())),
                    layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                            buffer,
                            offset: 0,
                            size: NonZeroU64::new(program.uniform_size()),
                        }),
                    }],
                });
                (program, bind_group)
            })
            .collect()
    }
}
