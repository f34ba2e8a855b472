use glam::{Mat4, Vec3};

/// Camera placement matrix: the camera's basis and position in world space.
///
/// Its inverse is the view matrix.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z_axis = (eye - target).normalize();
    let x_axis = up.cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis).normalize();
    Mat4::from_cols(
        x_axis.extend(0.0),
        y_axis.extend(0.0),
        z_axis.extend(0.0),
        eye.extend(1.0),
    )
}

/// Right-handed perspective with a [0, 1] depth range.
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_radians, aspect, near, far)
}

/// `m · T(t)`
pub fn translate(m: Mat4, t: Vec3) -> Mat4 {
    m * Mat4::from_translation(t)
}

/// `m · S(s)`
pub fn scale(m: Mat4, s: Vec3) -> Mat4 {
    m * Mat4::from_scale(s)
}

/// `m · Rx(angle)`
pub fn x_rotate(m: Mat4, radians: f32) -> Mat4 {
    m * Mat4::from_rotation_x(radians)
}

/// `m · Ry(angle)`
pub fn y_rotate(m: Mat4, radians: f32) -> Mat4 {
    m * Mat4::from_rotation_y(radians)
}
