//! Transform hierarchy of the cubes scene: world → podium → cube → vertex.

use std::path::Path;

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::AnimationState;
use crate::camera::Camera;
use crate::math::{deg_to_rad, m4};

/// Number of cubes on the podium; one spin angle each.
pub const CUBE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeSpec {
    /// World-space anchor
    pub position: [f32; 3],
    /// Edge scale
    pub size: f32,
    /// RGB
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodiumLayout {
    pub center: [f32; 3],
    pub cubes: [CubeSpec; CUBE_COUNT],
}

impl Default for PodiumLayout {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 8.0],
            cubes: [
                CubeSpec {
                    position: [-6.0, 0.0, 2.0],
                    size: 1.0,
                    color: [1.0, 1.0, 0.0],
                },
                CubeSpec {
                    position: [-2.0, 0.0, 2.0],
                    size: 1.0,
                    color: [0.75, 0.75, 0.75],
                },
                CubeSpec {
                    position: [2.0, 0.0, 2.0],
                    size: 1.0,
                    color: [0.4, 0.2, 0.1],
                },
                CubeSpec {
                    position: [6.0, 0.0, 2.0],
                    size: 1.0,
                    color: [0.0, 0.0, 0.0],
                },
            ],
        }
    }
}

impl PodiumLayout {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid podium layout")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read podium layout {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }
}

/// `T(position) · T(-size/2) · S(size) · Ry(angle)`
pub fn cube_local(cube: &CubeSpec, angle_degrees: f32) -> Mat4 {
    let half = cube.size / 2.0;
    let mut m = Mat4::IDENTITY;
    m = m4::translate(m, Vec3::from_array(cube.position));
    m = m4::translate(m, Vec3::splat(-half));
    m = m4::scale(m, Vec3::splat(cube.size));
    m4::y_rotate(m, deg_to_rad(angle_degrees))
}

/// `T(center) · Ry(angle)`
pub fn podium_transform(center: [f32; 3], angle_degrees: f32) -> Mat4 {
    m4::y_rotate(
        m4::translate(Mat4::IDENTITY, Vec3::from_array(center)),
        deg_to_rad(angle_degrees),
    )
}

/// `Ry(angle)`
pub fn world_transform(angle_degrees: f32) -> Mat4 {
    m4::y_rotate(Mat4::IDENTITY, deg_to_rad(angle_degrees))
}

/// Clip-space matrix for cube `index`: `viewProjection · world · podium · cubeLocal`.
///
/// Panics if `index >= CUBE_COUNT`.
pub fn cube_matrix(
    layout: &PodiumLayout,
    index: usize,
    state: &AnimationState,
    view_projection: Mat4,
) -> Mat4 {
    let local = cube_local(&layout.cubes[index], state.cube_angles[index]);
    let podium = podium_transform(layout.center, state.podium_angle);
    let world = world_transform(state.world_angle);
    view_projection * (world * podium) * local
}

/// Matrices for every cube, with the camera's view-projection at `aspect`.
pub fn cube_matrices(
    layout: &PodiumLayout,
    state: &AnimationState,
    camera: &Camera,
    aspect: f32,
) -> [Mat4; CUBE_COUNT] {
    let view_projection = camera.view_projection(aspect);
    std::array::from_fn(|i| cube_matrix(layout, i, state, view_projection))
}
