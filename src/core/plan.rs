use glam::Vec2;

use super::mesh::Mesh;
use crate::types::{FlatUniforms, MatrixUniforms, PodiumUniforms};

/// Shader program a draw runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    /// 2D shapes in pixel space, optional stripes
    Flat,
    /// Colored 3D cubes of the podium scene
    Podium,
    /// Yellow perspective cube of the gallery
    GalleryCube,
}

impl Program {
    pub const ALL: [Program; 3] = [Program::Flat, Program::Podium, Program::GalleryCube];

    pub fn label(self) -> &'static str {
        match self {
            Program::Flat => "Flat",
            Program::Podium => "Podium",
            Program::GalleryCube => "Gallery Cube",
        }
    }

    pub fn shader_source(self) -> &'static str {
        match self {
            Program::Flat => include_str!("../shaders/flat.wgsl"),
            Program::Podium => include_str!("../shaders/podium.wgsl"),
            Program::GalleryCube => include_str!("../shaders/gallery_cube.wgsl"),
        }
    }

    /// Float components per vertex position
    pub fn position_components(self) -> u32 {
        match self {
            Program::Flat => 2,
            Program::Podium => 3,
            Program::GalleryCube => 4,
        }
    }

    pub fn uniform_size(self) -> u64 {
        let size = match self {
            Program::Flat => std::mem::size_of::<FlatUniforms>(),
            Program::Podium => std::mem::size_of::<PodiumUniforms>(),
            Program::GalleryCube => std::mem::size_of::<MatrixUniforms>(),
        };
        size as u64
    }

    /// 3D programs test and write depth; flat shapes just paint in order
    pub fn uses_depth(self) -> bool {
        !matches!(self, Program::Flat)
    }
}

/// Per-draw uniform values, tagged by program
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawUniforms {
    Flat(FlatUniforms),
    Podium(PodiumUniforms),
    GalleryCube(MatrixUniforms),
}

impl DrawUniforms {
    pub fn program(&self) -> Program {
        match self {
            DrawUniforms::Flat(_) => Program::Flat,
            DrawUniforms::Podium(_) => Program::Podium,
            DrawUniforms::GalleryCube(_) => Program::GalleryCube,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DrawUniforms::Flat(u) => bytemuck::bytes_of(u),
            DrawUniforms::Podium(u) => bytemuck::bytes_of(u),
            DrawUniforms::GalleryCube(u) => bytemuck::bytes_of(u),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: Mesh,
    pub uniforms: DrawUniforms,
}

/// Text drawn on the overlay, anchored at its bottom-left corner in
/// logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub position: Vec2,
}

/// Everything one frame draws, in submission order
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear_color: [f64; 4],
    pub draws: Vec<DrawCommand>,
    pub labels: Vec<Label>,
}

impl FramePlan {
    pub fn new(clear_color: [f64; 4]) -> Self {
        Self {
            clear_color,
            draws: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn draw(&mut self, mesh: Mesh, uniforms: DrawUniforms) {
        self.draws.push(DrawCommand { mesh, uniforms });
    }

    pub fn label(&mut self, text: &'static str, position: Vec2) {
        self.labels.push(Label { text, position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::POINT_SIZE;

    #[test]
    fn flat_shader_has_point_sprite_entry() {
        let source = Program::Flat.shader_source();
        assert!(source.contains("fn vs_main"));
        assert!(source.contains("fn vs_point"));
        assert!(source.contains(&format!("const POINT_SIZE: f32 = {:.1};", POINT_SIZE)));
    }

    #[test]
    fn only_3d_programs_use_depth() {
        assert!(!Program::Flat.uses_depth());
        assert!(Program::Podium.uses_depth());
        assert!(Program::GalleryCube.uses_depth());
    }
}
