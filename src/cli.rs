// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which demo to open
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Four spinning cubes on a rotating podium
    Cubes,
    /// Primitive topologies, shapes and a perspective cube
    Gallery,
}

impl SceneKind {
    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Cubes => "Rotating Cubes Podium",
            SceneKind::Gallery => "Primitive Gallery",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "cg-demos")]
#[command(about = "Real-time rendering demos on wgpu", long_about = None)]
pub struct Cli {
    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::Cubes)]
    pub scene: SceneKind,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Seed for the gallery's per-frame colors (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file overriding the podium layout of the cubes scene
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Log filter in env_logger syntax, e.g. "debug" or "cg_demos=trace,wgpu=warn"
    #[arg(long = "log")]
    pub log_filter: Option<String>,

    /// Disable UI elements (FPS readout)
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_cubes_scene() {
        let cli = Cli::parse_from(["cg-demos"]);
        assert_eq!(cli.scene, SceneKind::Cubes);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert!(cli.seed.is_none());
        assert!(!cli.no_ui);
    }

    #[test]
    fn parses_gallery_with_seed() {
        let cli = Cli::parse_from(["cg-demos", "--scene", "gallery", "--seed", "7", "--no-ui"]);
        assert_eq!(cli.scene, SceneKind::Gallery);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.no_ui);
    }

    #[test]
    fn rejects_unknown_scene() {
        assert!(Cli::try_parse_from(["cg-demos", "--scene", "teapot"]).is_err());
    }
}
