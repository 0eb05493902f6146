use crate::config::viewer_config::ViewerConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::actions::build_glyph_atlas::glyph_atlas_builder::GlyphAtlasBuilder;
use crate::core::data::glyph_atlas::GlyphAtlas;
use crate::errors::{AppError, RenderBackendError};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::fractal_pipeline::FractalPipeline;
use crate::presenters::pixels::glyph_textures::{WgpuGlyphTexture, WgpuGlyphTextureFactory};
use crate::presenters::pixels::render_targets::{RenderTargets, TargetFormat};
use crate::presenters::pixels::shader_source::{load_shader_source, with_precision_flag};
use crate::presenters::pixels::text_pipeline::TextPipeline;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use tracing::info;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    fractal: FractalPipeline,
    text: TextPipeline,
    atlas: GlyphAtlas<WgpuGlyphTexture>,
    egui_renderer: EguiRenderer,
    target_format: TargetFormat,
    targets: RenderTargets,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, AppError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let present_mode = if config.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        // The pixel buffer is unused: every frame is drawn by our own pipelines.
        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .present_mode(present_mode)
            .build()
            .map_err(|error| RenderBackendError::Surface(error.to_string()))?;

        let adapter_info = pixels.adapter().get_info();
        info!(
            adapter = %adapter_info.name,
            backend = ?adapter_info.backend,
            ?present_mode,
            "GPU surface ready"
        );

        let target_format = TargetFormat {
            color: pixels.render_texture_format(),
            sample_count: config.msaa_samples,
            depth: config.depth_buffer,
        };

        let fractal_source = with_precision_flag(
            &load_shader_source(&config.fractal_shader_path())?,
            config.use_double,
        );
        let fractal = FractalPipeline::new(pixels.device(), target_format, &fractal_source)?;

        let mut texture_factory = WgpuGlyphTextureFactory::new(pixels.device(), pixels.queue());
        let atlas = GlyphAtlasBuilder::default().build_from_file(&config.font_path(), &mut texture_factory)?;

        let text_source = load_shader_source(&config.text_shader_path())?;
        let text = TextPipeline::new(pixels.device(), target_format, &text_source, &atlas)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let targets = RenderTargets::new(pixels.device(), target_format, size.width, size.height);

        info!(
            msaa = target_format.sample_count,
            depth = target_format.depth,
            double_precision = config.use_double,
            "renderer initialised"
        );

        Ok(Self {
            pixels,
            fractal,
            text,
            atlas,
            egui_renderer,
            target_format,
            targets,
            width: size.width,
            height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        frame: &FrameData,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), RenderBackendError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.fractal.update(self.pixels.queue(), &frame.uniforms);
        self.text.prepare(
            self.pixels.device(),
            self.pixels.queue(),
            &self.atlas,
            &frame.overlay,
            self.width,
            self.height,
        );

        let clear = wgpu::Color {
            r: f64::from(frame.uniforms.color_bg[0]),
            g: f64::from(frame.uniforms.color_bg[1]),
            b: f64::from(frame.uniforms.color_bg[2]),
            a: 1.0,
        };

        self.pixels
            .render_with(|encoder, render_target, context| {
                {
                    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("scene"),
                        color_attachments: &[Some(self.targets.color_attachment(render_target, clear))],
                        depth_stencil_attachment: self.targets.depth_attachment(),
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });

                    self.fractal.draw(&mut pass);
                    self.text.draw(&mut pass);
                }

                let clipped_primitives =
                    egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [self.width, self.height],
                    pixels_per_point: egui_ctx.pixels_per_point(),
                };

                let textures_delta = egui_output.textures_delta;

                for (id, delta) in &textures_delta.set {
                    self.egui_renderer
                        .update_texture(&context.device, &context.queue, *id, delta);
                }

                self.egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &clipped_primitives,
                    &screen_descriptor,
                );

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    self.egui_renderer.render(
                        &mut render_pass,
                        &clipped_primitives,
                        &screen_descriptor,
                    );
                }

                for id in &textures_delta.free {
                    self.egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(|error| RenderBackendError::Frame(error.to_string()))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderBackendError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(|error| RenderBackendError::Surface(error.to_string()))?;

        self.targets = RenderTargets::new(self.pixels.device(), self.target_format, width, height);

        Ok(())
    }

    fn backend_summary(&self) -> String {
        let info = self.pixels.adapter().get_info();
        format!("{} ({:?})", info.name, info.backend)
    }
}
