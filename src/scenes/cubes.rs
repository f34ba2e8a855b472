use super::Scene;
use crate::animation::{AnimationState, SpinInput};
use crate::camera::Camera;
use crate::core::{Controller, DisplayContext, DrawUniforms, FramePlan, GeometryStore, Mesh};
use crate::geometry::{CUBE_INDICES, CUBE_POSITIONS};
use crate::podium::{cube_matrices, PodiumLayout};
use crate::types::PodiumUniforms;

pub const CUBES_CLEAR_COLOR: [f64; 4] = [0.1, 0.1, 0.2, 1.0];

/// Four cubes on a podium, spun with keys 1 (cubes), 2 (podium) and 3 (world).
pub struct CubesScene {
    layout: PodiumLayout,
    camera: Camera,
    state: AnimationState,
    cube: Mesh,
}

impl CubesScene {
    pub fn new(store: &mut dyn GeometryStore, layout: PodiumLayout) -> Self {
        let cube = Mesh::indexed(store, "Podium Cube", &CUBE_POSITIONS, &CUBE_INDICES);
        log::debug!("Podium cube uploaded: {} indices", cube.count);
        Self {
            layout,
            camera: Camera::default(),
            state: AnimationState::default(),
            cube,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }
}

impl Scene for CubesScene {
    fn name(&self) -> &str {
        "cubes"
    }

    fn update(&mut self, controller: &dyn Controller) {
        self.state = self.state.advance(SpinInput::from_controller(controller));
    }

    fn plan(&mut self, display: &DisplayContext) -> FramePlan {
        let mut plan = FramePlan::new(CUBES_CLEAR_COLOR);
        let matrices = cube_matrices(&self.layout, &self.state, &self.camera, display.aspect());
        for (cube, matrix) in self.layout.cubes.iter().zip(matrices) {
            let [r, g, b] = cube.color;
            plan.draw(
                self.cube,
                DrawUniforms::Podium(PodiumUniforms::new(matrix, [r, g, b, 1.0])),
            );
        }
        plan
    }
}
