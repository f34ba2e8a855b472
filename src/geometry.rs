//! Static vertex data for both scenes.
//!
//! 2D shapes are in pixels with y pointing down; 3D shapes are unit cubes
//! spanning [-1, 1] on every axis.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Number of vertices in [`F_SHAPE`].
pub const F_VERTEX_COUNT: u32 = 18;

/// The "F" polygon: left column, top rung, middle rung, two triangles each.
pub const F_SHAPE: [[f32; 2]; 18] = [
    // left column
    [0.0, 0.0],
    [30.0, 0.0],
    [0.0, 150.0],
    [0.0, 150.0],
    [30.0, 0.0],
    [30.0, 150.0],
    // top rung
    [30.0, 0.0],
    [100.0, 0.0],
    [30.0, 30.0],
    [30.0, 30.0],
    [100.0, 0.0],
    [100.0, 30.0],
    // middle rung
    [30.0, 60.0],
    [67.0, 60.0],
    [30.0, 90.0],
    [30.0, 90.0],
    [67.0, 60.0],
    [67.0, 90.0],
];

pub const TRIANGLE: [[f32; 2]; 3] = [[0.0, 0.0], [0.0, 100.0], [100.0, 0.0]];

/// 100x100 square as two triangles.
pub const SQUARE: [[f32; 2]; 6] = [
    [0.0, 0.0],
    [100.0, 0.0],
    [0.0, 100.0],
    [100.0, 0.0],
    [100.0, 100.0],
    [0.0, 100.0],
];

pub const PENTAGON_RADIUS: f32 = 60.0;
pub const PENTAGON_POINTS: u32 = 5;

/// Vertices of a regular polygon centered on the origin, first vertex at the top.
///
/// Vertex `i` sits at angle `i * 2π / points - π/2`.
pub fn regular_polygon(radius: f32, points: u32) -> Vec<[f32; 2]> {
    (0..points)
        .map(|i| {
            let angle = i as f32 * TAU / points as f32 - FRAC_PI_2;
            [angle.cos() * radius, angle.sin() * radius]
        })
        .collect()
}

/// Cube corners, four per face, for indexed drawing with [`CUBE_INDICES`].
pub const CUBE_POSITIONS: [[f32; 3]; 24] = [
    // front
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    // back
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    // top
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    // bottom
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    // right
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    // left
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
];

/// Counter-clockwise triangles, two per face.
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    8, 9, 10, 8, 10, 11, // top
    12, 13, 14, 12, 14, 15, // bottom
    16, 17, 18, 16, 18, 19, // right
    20, 21, 22, 20, 22, 23, // left
];

/// Non-indexed homogeneous cube used by the gallery's perspective program.
pub const GALLERY_CUBE: [[f32; 4]; 36] = [
    [-1.0, -1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    //
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0],
    //
    [-1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    //
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0],
    //
    [1.0, -1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0],
    //
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pentagon_starts_at_top() {
        let vertices = regular_polygon(PENTAGON_RADIUS, PENTAGON_POINTS);
        assert_eq!(vertices.len(), 5);
        assert!(vertices[0][0].abs() < 1e-4);
        assert!((vertices[0][1] + 60.0).abs() < 1e-4);
    }

    #[test]
    fn pentagon_vertices_lie_on_circle() {
        for [x, y] in regular_polygon(PENTAGON_RADIUS, PENTAGON_POINTS) {
            assert!(((x * x + y * y).sqrt() - PENTAGON_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn cube_indices_stay_in_range() {
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_POSITIONS.len()));
    }

    #[test]
    fn gallery_cube_is_homogeneous() {
        assert!(GALLERY_CUBE.iter().all(|v| v[3] == 1.0));
    }
}
