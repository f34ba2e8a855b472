use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use cg_demos::app::App;
use cg_demos::cli::Cli;
use cg_demos::logging::{init_logging, LoggingConfig};
use cg_demos::SceneSettings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_filter(cli.log_filter.clone()));

    log::info!("Starting {} ({}x{})", cli.scene.title(), cli.width, cli.height);

    let settings = SceneSettings::from_cli(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, settings);
    event_loop.run_app(&mut app)?;

    app.finish()
}
