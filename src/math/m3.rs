use glam::{Mat3, Vec3};

/// Maps pixel coordinates (origin top-left, y down) to clip space.
pub fn projection(width: f32, height: f32) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(2.0 / width, 0.0, 0.0),
        Vec3::new(0.0, -2.0 / height, 0.0),
        Vec3::new(-1.0, 1.0, 1.0),
    )
}

pub fn translation(tx: f32, ty: f32) -> Mat3 {
    Mat3::from_cols(Vec3::X, Vec3::Y, Vec3::new(tx, ty, 1.0))
}

/// `m · T(tx, ty)`
pub fn translate(m: Mat3, tx: f32, ty: f32) -> Mat3 {
    m * translation(tx, ty)
}

/// Column-major mat3 padded to the 16-byte column stride of a WGSL uniform.
pub fn to_padded_cols(m: Mat3) -> [[f32; 4]; 3] {
    [
        m.x_axis.extend(0.0).to_array(),
        m.y_axis.extend(0.0).to_array(),
        m.z_axis.extend(0.0).to_array(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn projection_maps_corners_to_clip() {
        let m = projection(800.0, 600.0);
        let top_left = m.transform_point2(Vec2::ZERO);
        let bottom_right = m.transform_point2(Vec2::new(800.0, 600.0));
        assert!(top_left.abs_diff_eq(Vec2::new(-1.0, 1.0), 1e-6));
        assert!(bottom_right.abs_diff_eq(Vec2::new(1.0, -1.0), 1e-6));
    }

    #[test]
    fn translate_post_multiplies() {
        let m = translate(projection(200.0, 100.0), 100.0, 50.0);
        assert!(m.transform_point2(Vec2::ZERO).abs_diff_eq(Vec2::ZERO, 1e-6));
    }

    #[test]
    fn padded_cols_keep_values() {
        let cols = to_padded_cols(translation(3.0, 4.0));
        assert_eq!(cols[2], [3.0, 4.0, 1.0, 0.0]);
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
