mod cubes;
mod gallery;

pub use cubes::CubesScene;
pub use gallery::GalleryScene;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{Cli, SceneKind};
use crate::core::{Controller, DisplayContext, FramePlan, GeometryStore};
use crate::podium::PodiumLayout;

/// A self-contained render loop body.
///
/// Geometry goes into the store once, when the scene is built; after that a
/// frame is `update` followed by `plan`.
pub trait Scene {
    fn name(&self) -> &str;

    /// Advance animation state from the input held this frame.
    fn update(&mut self, controller: &dyn Controller);

    /// Transforms and draw calls for the current state.
    fn plan(&mut self, display: &DisplayContext) -> FramePlan;
}

/// Scene choice and inputs, resolved from the command line before any
/// window exists so a bad layout file fails the run up front.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub kind: SceneKind,
    pub layout: PodiumLayout,
    pub seed: Option<u64>,
}

impl SceneSettings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let layout = match (&cli.layout, cli.scene) {
            (Some(path), SceneKind::Cubes) => PodiumLayout::load(path)?,
            (Some(path), SceneKind::Gallery) => {
                log::warn!("--layout {} only applies to the cubes scene", path.display());
                PodiumLayout::default()
            }
            (None, _) => PodiumLayout::default(),
        };
        Ok(Self {
            kind: cli.scene,
            layout,
            seed: cli.seed,
        })
    }
}

/// Build the selected scene, uploading its geometry into `store`.
pub fn build_scene(settings: &SceneSettings, store: &mut dyn GeometryStore) -> Box<dyn Scene> {
    let scene: Box<dyn Scene> = match settings.kind {
        SceneKind::Cubes => Box::new(CubesScene::new(store, settings.layout.clone())),
        SceneKind::Gallery => {
            let rng = match settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Box::new(GalleryScene::new(store, rng))
        }
    };
    log::info!("Loaded scene: {}", scene.name());
    scene
}
