use cg_demos::animation::{AnimationState, SpinInput};
use cg_demos::core::{Button, Controller, DisplayContext, DrawUniforms, GeometryStore, BufferId};
use cg_demos::podium::PodiumLayout;
use cg_demos::{CubesScene, Scene};

/// Mock controller holding a fixed set of buttons
struct MockController {
    down: Vec<Button>,
}

impl MockController {
    fn holding(buttons: &[Button]) -> Self {
        Self {
            down: buttons.to_vec(),
        }
    }
}

impl Controller for MockController {
    fn is_down(&self, button: Button) -> bool {
        self.down.contains(&button)
    }
}

/// Store that only hands out ids
#[derive(Default)]
struct NullStore {
    next: usize,
}

impl GeometryStore for NullStore {
    fn upload_vertices(&mut self, _label: &str, _contents: &[u8]) -> BufferId {
        self.next += 1;
        BufferId(self.next - 1)
    }

    fn upload_indices(&mut self, _label: &str, _indices: &[u32]) -> BufferId {
        self.next += 1;
        BufferId(self.next - 1)
    }
}

fn run(scene: &mut CubesScene, controller: &MockController, frames: usize) {
    for _ in 0..frames {
        scene.update(controller);
    }
}

// ============================================================================
// Scene-level spin behavior
// ============================================================================

#[test]
fn test_holding_one_spins_every_cube() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    run(&mut scene, &MockController::holding(&[Button::Digit1]), 30);

    let state = scene.state();
    assert_eq!(state.cube_angles, [-30.0; 4]);
    assert_eq!(state.podium_angle, 0.0);
    assert_eq!(state.world_angle, 0.0);
}

#[test]
fn test_podium_and_world_are_independent() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    run(&mut scene, &MockController::holding(&[Button::Digit2]), 10);
    run(&mut scene, &MockController::holding(&[Button::Digit3]), 4);

    let state = scene.state();
    assert_eq!(state.cube_angles, [0.0; 4]);
    assert_eq!(state.podium_angle, -10.0);
    assert_eq!(state.world_angle, -4.0);
}

#[test]
fn test_combined_keys_advance_together() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    let all = MockController::holding(&[Button::Digit1, Button::Digit2, Button::Digit3]);
    run(&mut scene, &all, 5);

    let state = scene.state();
    assert_eq!(state.cube_angles, [-5.0; 4]);
    assert_eq!(state.podium_angle, -5.0);
    assert_eq!(state.world_angle, -5.0);
}

#[test]
fn test_idle_frames_change_nothing() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    run(&mut scene, &MockController::holding(&[]), 100);
    assert_eq!(*scene.state(), AnimationState::default());
}

#[test]
fn test_escape_does_not_spin() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    run(&mut scene, &MockController::holding(&[Button::Escape]), 3);
    assert_eq!(*scene.state(), AnimationState::default());
}

#[test]
fn test_spin_input_reads_controller() {
    let input = SpinInput::from_controller(&MockController::holding(&[Button::Digit3]));
    assert_eq!(
        input,
        SpinInput {
            cubes: false,
            podium: false,
            world: true
        }
    );
}

// ============================================================================
// Frame plans
// ============================================================================

#[test]
fn test_plan_draws_four_colored_cubes() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    let plan = scene.plan(&DisplayContext::new(800, 600, 1.0));

    assert_eq!(plan.draws.len(), 4);
    assert!(plan.labels.is_empty());
    assert_eq!(plan.clear_color, [0.1, 0.1, 0.2, 1.0]);

    let layout = PodiumLayout::default();
    for (draw, cube) in plan.draws.iter().zip(&layout.cubes) {
        let DrawUniforms::Podium(uniforms) = draw.uniforms else {
            panic!("expected podium uniforms");
        };
        assert_eq!(&uniforms.color[..3], &cube.color[..]);
        assert_eq!(uniforms.color[3], 1.0);
        assert_eq!(draw.mesh.count, 36);
    }
}

#[test]
fn test_plan_follows_spin() {
    let mut scene = CubesScene::new(&mut NullStore::default(), PodiumLayout::default());
    let display = DisplayContext::new(800, 600, 1.0);
    let before = scene.plan(&display);

    scene.update(&MockController::holding(&[Button::Digit3]));
    let after = scene.plan(&display);

    assert_ne!(before.draws, after.draws);
}
