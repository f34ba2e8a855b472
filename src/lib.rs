pub mod animation;
pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod frame;
pub mod gallery;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod overlay;
pub mod podium;
pub mod renderer;
pub mod scenes;
pub mod topology;
pub mod types;

pub use scenes::{build_scene, CubesScene, GalleryScene, Scene, SceneSettings};
