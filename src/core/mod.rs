pub mod controller;
pub mod display_context;
pub mod gpu_context;
pub mod gpu_geometry;
pub mod input_adapter;
pub mod mesh;
pub mod plan;
pub mod uniform_ring;

pub use controller::{quit_requested, Button, Controller};
pub use display_context::DisplayContext;
pub use gpu_context::{is_context_unavailable, ContextUnavailable, GpuContext};
pub use gpu_geometry::GpuGeometry;
pub use input_adapter::WinitController;
pub use mesh::{BufferId, GeometryStore, Mesh};
pub use plan::{DrawCommand, DrawUniforms, FramePlan, Label, Program};
pub use uniform_ring::UniformRing;
