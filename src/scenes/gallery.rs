use rand::rngs::StdRng;

use super::Scene;
use crate::core::{Controller, DisplayContext, DrawUniforms, FramePlan, GeometryStore, Mesh};
use crate::gallery::{
    entries, flat_matrix, gallery_cube_matrix, random_color, GalleryEntry, PENTAGON_ANCHOR,
    PENTAGON_COLOR, SQUARE_ANCHOR, STRIPED_SQUARE_ANCHOR, TRIANGLE_ANCHOR,
};
use crate::geometry::{
    regular_polygon, F_SHAPE, F_VERTEX_COUNT, GALLERY_CUBE, PENTAGON_POINTS, PENTAGON_RADIUS,
    SQUARE, TRIANGLE,
};
use crate::topology::Topology;
use crate::types::{FlatUniforms, MatrixUniforms};

pub const GALLERY_CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

struct GalleryMeshes {
    triangle: Mesh,
    square: Mesh,
    entries: [(GalleryEntry, Mesh); 10],
    pentagon: Mesh,
    cube: Mesh,
}

/// Static gallery of shapes and primitive topologies.
///
/// The triangle, the square and every "F" get a fresh random color each frame.
pub struct GalleryScene {
    meshes: GalleryMeshes,
    rng: StdRng,
}

impl GalleryScene {
    pub fn new(store: &mut dyn GeometryStore, rng: StdRng) -> Self {
        let triangle = Mesh::upload(store, "Triangle", &TRIANGLE, Topology::Triangles);
        let square = Mesh::upload(store, "Square", &SQUARE, Topology::Triangles);

        // one vertex buffer, one lowering per topology
        let f_vertices = store.upload_vertices("F", bytemuck::cast_slice(&F_SHAPE));
        let entries = entries().map(|entry| {
            let mesh = Mesh::with_topology(store, "F", f_vertices, F_VERTEX_COUNT, entry.topology);
            (entry, mesh)
        });

        let pentagon = Mesh::upload(
            store,
            "Pentagon",
            regular_polygon(PENTAGON_RADIUS, PENTAGON_POINTS).as_slice(),
            Topology::TriangleFan,
        );
        let cube = Mesh::upload(store, "Gallery Cube", &GALLERY_CUBE, Topology::Triangles);
        log::debug!("Gallery geometry uploaded");

        Self {
            meshes: GalleryMeshes {
                triangle,
                square,
                entries,
                pentagon,
                cube,
            },
            rng,
        }
    }
}

impl Scene for GalleryScene {
    fn name(&self) -> &str {
        "gallery"
    }

    fn update(&mut self, _controller: &dyn Controller) {}

    fn plan(&mut self, display: &DisplayContext) -> FramePlan {
        let meshes = &self.meshes;
        let mut plan = FramePlan::new(GALLERY_CLEAR_COLOR);
        let flat = |anchor, color, stripes| {
            DrawUniforms::Flat(FlatUniforms::new(flat_matrix(display, anchor), color, stripes))
        };

        let color = random_color(&mut self.rng);
        plan.draw(meshes.triangle, flat(TRIANGLE_ANCHOR, color, false));

        let color = random_color(&mut self.rng);
        plan.draw(meshes.square, flat(SQUARE_ANCHOR, color, false));

        for (entry, mesh) in &meshes.entries {
            let color = random_color(&mut self.rng);
            plan.draw(*mesh, flat(entry.anchor, color, false));
            plan.label(entry.label(), entry.label_position());
        }

        plan.draw(meshes.pentagon, flat(PENTAGON_ANCHOR, PENTAGON_COLOR, false));

        // stripes replace the color; only alpha is read
        plan.draw(meshes.square, flat(STRIPED_SQUARE_ANCHOR, PENTAGON_COLOR, true));

        plan.draw(
            meshes.cube,
            DrawUniforms::GalleryCube(MatrixUniforms::new(gallery_cube_matrix(display.aspect()))),
        );
        plan
    }
}
