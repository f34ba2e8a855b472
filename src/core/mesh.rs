use std::ops::Range;

use crate::topology::{Primitive, Topology, POINT_SPRITE_VERTICES};

/// Handle to a buffer owned by a [`GeometryStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub usize);

/// Write-once storage for vertex and index data.
///
/// Scenes upload all their geometry through this at construction; nothing
/// is uploaded while frames are planned.
pub trait GeometryStore {
    fn upload_vertices(&mut self, label: &str, contents: &[u8]) -> BufferId;

    fn upload_indices(&mut self, label: &str, indices: &[u32]) -> BufferId;
}

/// Uploaded geometry ready to draw: buffers, primitive and element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh {
    pub vertices: BufferId,
    pub indices: Option<BufferId>,
    pub primitive: Primitive,
    /// Vertices to draw, or indices when `indices` is set
    pub count: u32,
}

impl Mesh {
    /// Upload `vertices` and lower `topology` over them.
    pub fn upload<V: bytemuck::Pod>(
        store: &mut dyn GeometryStore,
        label: &str,
        vertices: &[V],
        topology: Topology,
    ) -> Self {
        let id = store.upload_vertices(label, bytemuck::cast_slice(vertices));
        Self::with_topology(store, label, id, vertices.len() as u32, topology)
    }

    /// Draw already-uploaded vertices with `topology`, uploading an index
    /// buffer when the topology has to be lowered.
    pub fn with_topology(
        store: &mut dyn GeometryStore,
        label: &str,
        vertices: BufferId,
        vertex_count: u32,
        topology: Topology,
    ) -> Self {
        let primitive = topology.primitive();
        match topology.indices(vertex_count) {
            None => Self {
                vertices,
                indices: None,
                primitive,
                count: vertex_count,
            },
            Some(indices) if indices.is_empty() => Self {
                vertices,
                indices: None,
                primitive,
                count: 0,
            },
            Some(indices) => {
                let index_label = format!("{} {} indices", label, topology.name());
                Self {
                    vertices,
                    indices: Some(store.upload_indices(&index_label, &indices)),
                    primitive,
                    count: indices.len() as u32,
                }
            }
        }
    }

    /// Upload vertices with an explicit triangle index list.
    pub fn indexed<V: bytemuck::Pod>(
        store: &mut dyn GeometryStore,
        label: &str,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        let vertex_id = store.upload_vertices(label, bytemuck::cast_slice(vertices));
        let index_id = store.upload_indices(&format!("{} indices", label), indices);
        Self {
            vertices: vertex_id,
            indices: Some(index_id),
            primitive: Primitive::Triangles,
            count: indices.len() as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Vertex (or index) and instance ranges for the draw call. Point
    /// sprites draw one instance per point.
    pub fn draw_ranges(&self) -> (Range<u32>, Range<u32>) {
        if self.primitive.is_sprite() {
            (0..POINT_SPRITE_VERTICES, 0..self.count)
        } else {
            (0..self.count, 0..1)
        }
    }
}
