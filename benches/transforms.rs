use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cg_demos::animation::AnimationState;
use cg_demos::camera::Camera;
use cg_demos::core::{BufferId, DisplayContext, GeometryStore};
use cg_demos::podium::{cube_matrices, PodiumLayout};
use cg_demos::topology::{Topology, GALLERY_TOPOLOGIES};
use cg_demos::{GalleryScene, Scene};

struct NullStore(usize);

impl GeometryStore for NullStore {
    fn upload_vertices(&mut self, _label: &str, _contents: &[u8]) -> BufferId {
        self.0 += 1;
        BufferId(self.0)
    }

    fn upload_indices(&mut self, _label: &str, _indices: &[u32]) -> BufferId {
        self.0 += 1;
        BufferId(self.0)
    }
}

fn bench_cube_matrices(c: &mut Criterion) {
    let layout = PodiumLayout::default();
    let camera = Camera::default();
    let state = AnimationState {
        cube_angles: [-10.0; 4],
        podium_angle: -20.0,
        world_angle: -30.0,
    };

    c.bench_function("cube_matrices", |b| {
        b.iter(|| cube_matrices(black_box(&layout), black_box(&state), &camera, 4.0 / 3.0))
    });
}

fn bench_gallery_plan(c: &mut Criterion) {
    let mut scene = GalleryScene::new(&mut NullStore(0), StdRng::seed_from_u64(0));
    let display = DisplayContext::new(1280, 720, 1.0);

    c.bench_function("gallery_plan", |b| b.iter(|| scene.plan(black_box(&display))));
}

fn bench_topology_lowering(c: &mut Criterion) {
    let mut group = c.benchmark_group("topology_lowering");
    for topology in GALLERY_TOPOLOGIES
        .into_iter()
        .filter(|t| t.indices(4).is_some())
    {
        group.bench_function(topology.name(), |b| {
            b.iter(|| Topology::indices(black_box(topology), black_box(1024)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cube_matrices,
    bench_gallery_plan,
    bench_topology_lowering
);
criterion_main!(benches);
