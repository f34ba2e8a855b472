//! GPU-side data layouts shared with the WGSL programs.

use glam::{Mat3, Mat4};

use crate::math::m3;

/// Uniforms of `flat.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatUniforms {
    /// `u_matrix`, mat3x3 with 16-byte columns
    pub matrix: [[f32; 4]; 3],
    /// `u_color`
    pub color: [f32; 4],
    /// `u_showStripes`, 0 or 1
    pub show_stripes: u32,
    pub _pad: [u32; 3],
}

impl FlatUniforms {
    pub fn new(matrix: Mat3, color: [f32; 4], show_stripes: bool) -> Self {
        Self {
            matrix: m3::to_padded_cols(matrix),
            color,
            show_stripes: show_stripes as u32,
            _pad: [0; 3],
        }
    }
}

/// Uniforms of `podium.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PodiumUniforms {
    pub matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl PodiumUniforms {
    pub fn new(matrix: Mat4, color: [f32; 4]) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
            color,
        }
    }
}

/// Uniforms of `gallery_cube.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatrixUniforms {
    pub matrix: [[f32; 4]; 4],
}

impl MatrixUniforms {
    pub fn new(matrix: Mat4) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sizes must match the WGSL struct layouts
    #[test]
    fn uniform_sizes_match_wgsl() {
        assert_eq!(std::mem::size_of::<FlatUniforms>(), 80);
        assert_eq!(std::mem::size_of::<PodiumUniforms>(), 80);
        assert_eq!(std::mem::size_of::<MatrixUniforms>(), 64);
    }

    #[test]
    fn stripes_flag_is_numeric() {
        let on = FlatUniforms::new(Mat3::IDENTITY, [1.0; 4], true);
        let off = FlatUniforms::new(Mat3::IDENTITY, [1.0; 4], false);
        assert_eq!(on.show_stripes, 1);
        assert_eq!(off.show_stripes, 0);
    }
}
