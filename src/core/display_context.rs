use glam::Vec2;

/// Display context - drawable size and scale factor
///
/// Scenes lay things out in logical pixels (what a browser would call the
/// client size); the surface itself is `width` x `height` physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayContext {
    /// Width in physical pixels
    pub width: u32,
    /// Height in physical pixels
    pub height: u32,
    /// Physical pixels per logical pixel
    pub scale_factor: f64,
}

impl DisplayContext {
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Size in logical pixels, never zero on either axis
    pub fn logical_size(&self) -> Vec2 {
        let scale = self.scale_factor.max(f64::EPSILON);
        Vec2::new(
            (self.width.max(1) as f64 / scale) as f32,
            (self.height.max(1) as f64 / scale) as f32,
        )
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        let size = self.logical_size();
        size.x / size.y
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
