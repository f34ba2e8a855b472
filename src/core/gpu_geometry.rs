use wgpu::util::DeviceExt;

use super::gpu_context::GpuContext;
use super::mesh::{BufferId, GeometryStore};

/// [`GeometryStore`] backed by immutable wgpu buffers.
///
/// Buffers are created without `COPY_DST`, so nothing can rewrite them after
/// the initial upload.
pub struct GpuGeometry {
    gpu: GpuContext,
    buffers: Vec<wgpu::Buffer>,
}

impl GpuGeometry {
    pub fn new(gpu: GpuContext) -> Self {
        Self {
            gpu,
            buffers: Vec::new(),
        }
    }

    pub fn buffer(&self, id: BufferId) -> Option<&wgpu::Buffer> {
        self.buffers.get(id.0)
    }

    fn push(&mut self, label: &str, contents: &[u8], usage: wgpu::BufferUsages) -> BufferId {
        let buffer = self
            .gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            });
        log::debug!("Uploaded {} ({} bytes)", label, contents.len());
        self.buffers.push(buffer);
        BufferId(self.buffers.len() - 1)
    }
}

impl GeometryStore for GpuGeometry {
    fn upload_vertices(&mut self, label: &str, contents: &[u8]) -> BufferId {
        self.push(label, contents, wgpu::BufferUsages::VERTEX)
    }

    fn upload_indices(&mut self, label: &str, indices: &[u32]) -> BufferId {
        self.push(label, bytemuck::cast_slice(indices), wgpu::BufferUsages::INDEX)
    }
}
