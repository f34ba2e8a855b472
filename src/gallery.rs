//! Layout of the primitive gallery: where every shape goes and how it is
//! transformed. Positions are in logical pixels, origin top-left.

use glam::{Mat3, Mat4, Vec2, Vec3};
use rand::Rng;

use crate::core::DisplayContext;
use crate::math::{deg_to_rad, m3, m4};
use crate::topology::{Topology, GALLERY_TOPOLOGIES};

pub const GALLERY_ORIGIN: Vec2 = Vec2::new(200.0, 80.0);
pub const GALLERY_COLUMNS: usize = 5;
pub const COLUMN_SPACING: f32 = 150.0;
pub const ROW_SPACING: f32 = 250.0;
/// Labels sit this far above their entry's anchor
pub const LABEL_OFFSET: f32 = 10.0;

pub const TRIANGLE_ANCHOR: Vec2 = Vec2::new(50.0, GALLERY_ORIGIN.y);
pub const SQUARE_ANCHOR: Vec2 = Vec2::new(50.0, GALLERY_ORIGIN.y + 250.0);
pub const PENTAGON_ANCHOR: Vec2 = Vec2::new(100.0, GALLERY_ORIGIN.y + 520.0);
pub const STRIPED_SQUARE_ANCHOR: Vec2 = Vec2::new(200.0, 550.0);

pub const PENTAGON_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryEntry {
    pub topology: Topology,
    pub anchor: Vec2,
}

impl GalleryEntry {
    pub fn label(&self) -> &'static str {
        self.topology.name()
    }

    pub fn label_position(&self) -> Vec2 {
        self.anchor - Vec2::new(0.0, LABEL_OFFSET)
    }
}

/// Anchor of entry `index`: five per row, left to right, then down.
pub fn entry_anchor(index: usize) -> Vec2 {
    let col = (index % GALLERY_COLUMNS) as f32;
    let row = (index / GALLERY_COLUMNS) as f32;
    GALLERY_ORIGIN + Vec2::new(col * COLUMN_SPACING, row * ROW_SPACING)
}

pub fn entries() -> [GalleryEntry; 10] {
    std::array::from_fn(|i| GalleryEntry {
        topology: GALLERY_TOPOLOGIES[i],
        anchor: entry_anchor(i),
    })
}

/// `projection(client size) · translate(anchor)`
pub fn flat_matrix(display: &DisplayContext, anchor: Vec2) -> Mat3 {
    let size = display.logical_size();
    m3::translate(m3::projection(size.x, size.y), anchor.x, anchor.y)
}

/// Fixed perspective placement of the gallery cube.
pub fn gallery_cube_matrix(aspect: f32) -> Mat4 {
    let mut m = m4::perspective(deg_to_rad(60.0), aspect, 1.0, 2000.0);
    m = m4::translate(m, Vec3::new(0.0, -150.0, -1000.0));
    m = m4::x_rotate(m, deg_to_rad(30.0));
    m = m4::y_rotate(m, deg_to_rad(60.0));
    m4::scale(m, Vec3::splat(60.0))
}

/// Opaque color with random RGB channels in [0, 1).
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [f32; 4] {
    [rng.random(), rng.random(), rng.random(), 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn second_row_starts_under_first() {
        assert_eq!(entry_anchor(0), Vec2::new(200.0, 80.0));
        assert_eq!(entry_anchor(4), Vec2::new(800.0, 80.0));
        assert_eq!(entry_anchor(5), Vec2::new(200.0, 330.0));
    }

    #[test]
    fn anchor_maps_to_clip_position() {
        let display = DisplayContext::new(1000, 800, 1.0);
        let m = flat_matrix(&display, Vec2::new(500.0, 400.0));
        assert!(m.transform_point2(Vec2::ZERO).abs_diff_eq(Vec2::ZERO, 1e-6));
    }

    #[test]
    fn gallery_cube_sits_in_front_of_camera() {
        let clip = gallery_cube_matrix(1.5) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
        assert!(ndc.y < 0.0);
    }

    #[test]
    fn random_color_is_opaque_and_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let c = random_color(&mut rng);
            assert_eq!(c[3], 1.0);
            assert!(c[..3].iter().all(|v| (0.0..1.0).contains(v)));
        }
    }
}
