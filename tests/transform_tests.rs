use glam::{Mat4, Vec3, Vec4};

use cg_demos::animation::AnimationState;
use cg_demos::camera::Camera;
use cg_demos::gallery::gallery_cube_matrix;
use cg_demos::podium::{cube_matrices, cube_matrix, PodiumLayout, CUBE_COUNT};

fn rad(deg: f32) -> f32 {
    deg.to_radians()
}

/// Same chain built straight from glam constructors
fn expected_cube_matrix(
    layout: &PodiumLayout,
    index: usize,
    state: &AnimationState,
    aspect: f32,
) -> Mat4 {
    let camera = Camera::default();
    let view = Mat4::look_at_rh(camera.eye, camera.target, camera.up);
    let projection = Mat4::perspective_rh(rad(camera.fov_degrees), aspect, camera.near, camera.far);

    let cube = &layout.cubes[index];
    let local = Mat4::from_translation(Vec3::from_array(cube.position))
        * Mat4::from_translation(Vec3::splat(-cube.size / 2.0))
        * Mat4::from_scale(Vec3::splat(cube.size))
        * Mat4::from_rotation_y(rad(state.cube_angles[index]));
    let podium = Mat4::from_translation(Vec3::from_array(layout.center))
        * Mat4::from_rotation_y(rad(state.podium_angle));
    let world = Mat4::from_rotation_y(rad(state.world_angle));

    projection * view * world * podium * local
}

#[test]
fn test_cube_matrices_match_direct_recomputation() {
    let layout = PodiumLayout::default();
    let state = AnimationState {
        cube_angles: [-12.0, -12.0, -12.0, -12.0],
        podium_angle: -47.0,
        world_angle: -200.0,
    };
    let camera = Camera::default();

    for aspect in [4.0 / 3.0, 16.0 / 9.0, 0.5] {
        let matrices = cube_matrices(&layout, &state, &camera, aspect);
        for (i, matrix) in matrices.iter().enumerate() {
            let expected = expected_cube_matrix(&layout, i, &state, aspect);
            assert!(
                matrix.abs_diff_eq(expected, 1e-4),
                "cube {} at aspect {}: {:?} != {:?}",
                i,
                aspect,
                matrix,
                expected
            );
        }
    }
}

#[test]
fn test_single_cube_matches_batch() {
    let layout = PodiumLayout::default();
    let state = AnimationState::default();
    let camera = Camera::default();
    let batch = cube_matrices(&layout, &state, &camera, 1.5);

    for i in 0..CUBE_COUNT {
        let single = cube_matrix(&layout, i, &state, camera.view_projection(1.5));
        assert_eq!(single, batch[i]);
    }
}

#[test]
fn test_cubes_start_in_front_of_camera() {
    let layout = PodiumLayout::default();
    let matrices = cube_matrices(&layout, &AnimationState::default(), &Camera::default(), 4.0 / 3.0);

    for matrix in matrices {
        let clip = matrix * Vec4::new(0.5, 0.5, 0.5, 1.0);
        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}

#[test]
fn test_full_world_turn_returns_home() {
    let layout = PodiumLayout::default();
    let camera = Camera::default();
    let home = cube_matrices(&layout, &AnimationState::default(), &camera, 1.0);
    let turned = AnimationState {
        world_angle: -360.0,
        ..AnimationState::default()
    };
    let after = cube_matrices(&layout, &turned, &camera, 1.0);

    for (a, b) in home.iter().zip(&after) {
        assert!(a.abs_diff_eq(*b, 1e-4));
    }
}

#[test]
fn test_gallery_cube_matrix_composition() {
    let aspect = 1024.0 / 768.0;
    let expected = Mat4::perspective_rh(rad(60.0), aspect, 1.0, 2000.0)
        * Mat4::from_translation(Vec3::new(0.0, -150.0, -1000.0))
        * Mat4::from_rotation_x(rad(30.0))
        * Mat4::from_rotation_y(rad(60.0))
        * Mat4::from_scale(Vec3::splat(60.0));

    assert!(gallery_cube_matrix(aspect).abs_diff_eq(expected, 1e-4));
}
