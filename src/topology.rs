/// How a flat vertex list is grouped into primitives.
///
/// Only a subset maps directly onto a GPU primitive; the rest
/// (`LineLoop`, `TriangleFan`, `Polygon`, `Quads`, `QuadStrip`) are lowered
/// into an index list over the same vertices, see [`Topology::indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Points,
    Polygon,
    Quads,
    QuadStrip,
}

/// Topologies in gallery order; entry `i` is drawn with `GALLERY_TOPOLOGIES[i]`.
pub const GALLERY_TOPOLOGIES: [Topology; 10] = [
    Topology::Lines,
    Topology::LineStrip,
    Topology::LineLoop,
    Topology::Triangles,
    Topology::TriangleStrip,
    Topology::TriangleFan,
    Topology::Points,
    Topology::Polygon,
    Topology::Quads,
    Topology::QuadStrip,
];

/// Points are drawn as square sprites this many pixels wide.
pub const POINT_SIZE: f32 = 3.0;
/// Corners per point sprite: two triangles.
pub const POINT_SPRITE_VERTICES: u32 = 6;

/// Primitive kinds the GPU rasterizes natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

impl Primitive {
    pub const ALL: [Primitive; 5] = [
        Primitive::Points,
        Primitive::Lines,
        Primitive::LineStrip,
        Primitive::Triangles,
        Primitive::TriangleStrip,
    ];

    /// Points are expanded into [`POINT_SIZE`] sprites, since the GPU only
    /// rasterizes 1 px points.
    pub fn is_sprite(self) -> bool {
        matches!(self, Primitive::Points)
    }

    /// Pipeline topology; sprites are rasterized as triangles.
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Primitive::Points => wgpu::PrimitiveTopology::TriangleList,
            Primitive::Lines => wgpu::PrimitiveTopology::LineList,
            Primitive::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            Primitive::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Primitive::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }
}

impl Topology {
    /// Label shown next to the gallery entry.
    pub fn name(self) -> &'static str {
        match self {
            Topology::Lines => "LINES",
            Topology::LineStrip => "LINE_STRIP",
            Topology::LineLoop => "LINE_LOOP",
            Topology::Triangles => "TRIANGLES",
            Topology::TriangleStrip => "TRIANGLE_STRIP",
            Topology::TriangleFan => "TRIANGLE_FAN",
            Topology::Points => "POINTS",
            Topology::Polygon => "POLYGON",
            Topology::Quads => "QUADS",
            Topology::QuadStrip => "QUAD_STRIP",
        }
    }

    /// The native primitive this topology is drawn with.
    pub fn primitive(self) -> Primitive {
        match self {
            Topology::Points => Primitive::Points,
            Topology::Lines | Topology::LineLoop => Primitive::Lines,
            Topology::LineStrip => Primitive::LineStrip,
            Topology::TriangleStrip => Primitive::TriangleStrip,
            Topology::Triangles
            | Topology::TriangleFan
            | Topology::Polygon
            | Topology::Quads
            | Topology::QuadStrip => Primitive::Triangles,
        }
    }

    /// Index list lowering this topology onto [`Topology::primitive`], or
    /// `None` when the vertices can be drawn in order as-is.
    ///
    /// Trailing vertices that don't complete a primitive are dropped, as the
    /// fixed-function pipeline did.
    pub fn indices(self, vertex_count: u32) -> Option<Vec<u32>> {
        let n = vertex_count;
        match self {
            Topology::Lines
            | Topology::LineStrip
            | Topology::Triangles
            | Topology::TriangleStrip
            | Topology::Points => None,
            Topology::LineLoop => {
                if n < 2 {
                    return Some(Vec::new());
                }
                Some((0..n).flat_map(|i| [i, (i + 1) % n]).collect())
            }
            Topology::TriangleFan | Topology::Polygon => {
                if n < 3 {
                    return Some(Vec::new());
                }
                Some((1..n - 1).flat_map(|i| [0, i, i + 1]).collect())
            }
            Topology::Quads => Some(
                (0..n / 4)
                    .flat_map(|q| {
                        let a = q * 4;
                        [a, a + 1, a + 2, a, a + 2, a + 3]
                    })
                    .collect(),
            ),
            Topology::QuadStrip => {
                if n < 4 {
                    return Some(Vec::new());
                }
                Some(
                    (0..n / 2 - 1)
                        .flat_map(|k| {
                            let a = k * 2;
                            [a, a + 1, a + 3, a, a + 3, a + 2]
                        })
                        .collect(),
                )
            }
        }
    }

    /// Number of vertices or indices submitted for `vertex_count` vertices.
    pub fn element_count(self, vertex_count: u32) -> u32 {
        match self.indices(vertex_count) {
            Some(indices) => indices.len() as u32,
            None => vertex_count,
        }
    }
}
