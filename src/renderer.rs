use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::core::{
    ContextUnavailable, DisplayContext, FramePlan, GeometryStore, GpuContext, GpuGeometry,
    Program, UniformRing,
};
use crate::overlay::Overlay;
use crate::topology::Primitive;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Native primitives each program is compiled for.
fn program_primitives(program: Program) -> &'static [Primitive] {
    match program {
        Program::Flat => &Primitive::ALL,
        Program::Podium | Program::GalleryCube => &[Primitive::Triangles],
    }
}

fn position_format(program: Program) -> wgpu::VertexFormat {
    match program.position_components() {
        2 => wgpu::VertexFormat::Float32x2,
        3 => wgpu::VertexFormat::Float32x3,
        _ => wgpu::VertexFormat::Float32x4,
    }
}

/// Executes [`FramePlan`]s on a window surface.
///
/// Owns the write-once geometry, one pipeline per (program, primitive) and
/// the per-draw uniform ring.
pub struct FrameRenderer {
    gpu: GpuContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    geometry: GpuGeometry,
    uniforms: UniformRing,
    pipelines: HashMap<(Program, Primitive), wgpu::RenderPipeline>,
    overlay: Overlay,
}

impl FrameRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| ContextUnavailable {
                reason: format!("surface creation failed: {}", e),
            })?;
        let gpu = GpuContext::new_with_surface(&instance, &surface).await?;

        let config = Self::create_surface_config(&surface, gpu.adapter(), size)?;
        surface.configure(gpu.device(), &config);

        let depth_view = Self::create_depth_view(gpu.device(), config.width, config.height);
        let uniforms = UniformRing::new(gpu.device());
        let pipelines = Self::create_pipelines(gpu.device(), &uniforms, config.format)?;
        let overlay = Overlay::new(gpu.device(), config.format, &window);
        let geometry = GpuGeometry::new(gpu.clone());

        log::info!(
            "Renderer initialized: {}x{} {:?}, {} pipelines",
            config.width,
            config.height,
            config.format,
            pipelines.len()
        );

        Ok(Self {
            gpu,
            surface,
            config,
            depth_view,
            geometry,
            uniforms,
            pipelines,
            overlay,
        })
    }

    /// Where scenes upload their geometry.
    pub fn geometry_store(&mut self) -> &mut dyn GeometryStore {
        &mut self.geometry
    }

    pub fn display_context(&self, scale_factor: f64) -> DisplayContext {
        DisplayContext::new(self.config.width, self.config.height, scale_factor)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(self.gpu.device(), &self.config);
        self.depth_view = Self::create_depth_view(self.gpu.device(), width, height);
    }

    /// Reconfigure with the current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.resize(self.config.width, self.config.height);
    }

    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.overlay.handle_event(window, event)
    }

    /// Draw one frame: every draw in plan order, then the overlay.
    pub fn render(
        &mut self,
        plan: &FramePlan,
        window: &Window,
        fps: Option<f32>,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let device = self.gpu.device();
        let queue = self.gpu.queue();
        let offsets = self.uniforms.write(device, queue, &plan.draws);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Frame Encoder"),
        });

        {
            let [r, g, b, a] = plan.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            for (draw, &offset) in plan.draws.iter().zip(&offsets) {
                if draw.mesh.is_empty() {
                    continue;
                }
                let program = draw.uniforms.program();
                let Some(pipeline) = self.pipelines.get(&(program, draw.mesh.primitive)) else {
                    log::warn!("No pipeline for {:?} {:?}", program, draw.mesh.primitive);
                    continue;
                };
                let Some(bind_group) = self.uniforms.bind_group(program) else {
                    continue;
                };
                let Some(vertices) = self.geometry.buffer(draw.mesh.vertices) else {
                    continue;
                };

                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, bind_group, &[offset]);
                render_pass.set_vertex_buffer(0, vertices.slice(..));

                let (elements, instances) = draw.mesh.draw_ranges();
                match draw.mesh.indices {
                    Some(id) => {
                        let Some(indices) = self.geometry.buffer(id) else {
                            continue;
                        };
                        render_pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                        render_pass.draw_indexed(elements, 0, instances);
                    }
                    None => render_pass.draw(elements, instances),
                }
            }
        }

        let callbacks = self.overlay.render(
            device,
            queue,
            &mut encoder,
            &view,
            window,
            [self.config.width, self.config.height],
            &plan.labels,
            fps,
        );

        queue.submit(callbacks.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();
        Ok(())
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| ContextUnavailable {
                reason: "surface reports no formats".to_string(),
            })?;

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_pipelines(
        device: &wgpu::Device,
        uniforms: &UniformRing,
        format: wgpu::TextureFormat,
    ) -> Result<HashMap<(Program, Primitive), wgpu::RenderPipeline>> {
        let mut pipelines = HashMap::new();

        for program in Program::ALL {
            let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(&format!("{} Shader", program.label())),
                source: wgpu::ShaderSource::Wgsl(program.shader_source().into()),
            });

            let bind_group_layout = uniforms
                .layout(program)
                .with_context(|| format!("No uniform layout for {:?}", program))?;
            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{} Pipeline Layout", program.label())),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            });

            for &primitive in program_primitives(program) {
                let pipeline =
                    Self::create_pipeline(device, &shader, &pipeline_layout, program, primitive, format);
                pipelines.insert((program, primitive), pipeline);
            }
        }

        Ok(pipelines)
    }

    fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        layout: &wgpu::PipelineLayout,
        program: Program,
        primitive: Primitive,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let attributes = [wgpu::VertexAttribute {
            format: position_format(program),
            offset: 0,
            shader_location: 0,
        }];
        // sprites read one position per instance and expand it in `vs_point`
        let (vertex_entry, step_mode) = if primitive.is_sprite() {
            ("vs_point", wgpu::VertexStepMode::Instance)
        } else {
            ("vs_main", wgpu::VertexStepMode::Vertex)
        };
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: (program.position_components() as usize * std::mem::size_of::<f32>())
                as wgpu::BufferAddress,
            step_mode,
            attributes: &attributes,
        };

        let depth = program.uses_depth();

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} {:?} Pipeline", program.label(), primitive)),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vertex_entry),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: primitive.to_wgpu(),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // only the closed podium cubes are culled
                cull_mode: match program {
                    Program::Podium => Some(wgpu::Face::Back),
                    _ => None,
                },
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth,
                depth_compare: if depth {
                    wgpu::CompareFunction::Less
                } else {
                    wgpu::CompareFunction::Always
                },
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}
