use glam::{Mat4, Vec3};

use crate::math::{deg_to_rad, m4};

pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 10.0, 30.0);
pub const CAMERA_FOV_DEGREES: f32 = 90.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;

/// Fixed look-at camera; only the aspect ratio changes between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn projection(&self, aspect: f32) -> Mat4 {
        m4::perspective(deg_to_rad(self.fov_degrees), aspect, self.near, self.far)
    }

    /// World transform of the camera itself.
    pub fn camera_matrix(&self) -> Mat4 {
        m4::look_at(self.eye, self.target, self.up)
    }

    pub fn view(&self) -> Mat4 {
        self.camera_matrix().inverse()
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}
