use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::cli::Cli;
use crate::core::{is_context_unavailable, quit_requested, WinitController};
use crate::frame::{FpsCounter, FrameIterator};
use crate::renderer::FrameRenderer;
use crate::scenes::{build_scene, Scene, SceneSettings};

/// Window, renderer and scene, created on the first `resumed`.
struct Running {
    window: Arc<Window>,
    renderer: FrameRenderer,
    scene: Box<dyn Scene>,
}

pub struct App {
    cli: Cli,
    settings: SceneSettings,
    running: Option<Running>,
    /// Startup failure other than a missing rendering context
    error: Option<anyhow::Error>,
    controller: WinitController,
    frames: FrameIterator,
    fps: FpsCounter,
}

impl App {
    pub fn new(cli: Cli, settings: SceneSettings) -> Self {
        Self {
            cli,
            settings,
            running: None,
            error: None,
            controller: WinitController::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::new(),
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Running> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(self.cli.scene.title())
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )?,
        );

        let mut renderer = pollster::block_on(FrameRenderer::new(window.clone()))?;
        let scene = build_scene(&self.settings, renderer.geometry_store());

        Ok(Running {
            window,
            renderer,
            scene,
        })
    }

    /// How the run ended: `Ok` on a normal quit or a missing rendering
    /// context, the startup error otherwise.
    pub fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = &mut self.running else {
            return;
        };
        let Some(frame) = self.frames.next() else {
            return;
        };
        self.fps.tick(frame.delta);

        running.scene.update(&self.controller);
        let display = running
            .renderer
            .display_context(running.window.scale_factor());
        let plan = running.scene.plan(&display);

        let fps = (!self.cli.no_ui).then(|| self.fps.fps());
        match running.renderer.render(&plan, &running.window, fps) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                running.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(running) => {
                log::info!(
                    "Running {} - hold 1/2/3 to spin, Escape to quit",
                    running.scene.name()
                );
                self.running = Some(running);
            }
            Err(e) if is_context_unavailable(&e) => {
                log::warn!("{:#}; nothing to draw", e);
                event_loop.exit();
            }
            Err(e) => {
                self.error = Some(e.context("Failed to start"));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let Some(running) = &mut self.running {
            if running.renderer.handle_event(&running.window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => {
                self.controller.process_event(&event);
                if quit_requested(&self.controller) {
                    event_loop.exit();
                }
            }
            WindowEvent::Focused(false) => self.controller.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(running) = &mut self.running {
                    running.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }
}
