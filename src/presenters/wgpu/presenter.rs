use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::info;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::core::data::Vec2;
use crate::presenters::wgpu::renderer::{FractalRenderer, RendererCompiler};

/// Owns the window surface and draws the fractal with the egui overlay on top.
///
/// `pixels` only provides the device, queue and surface here. Its own
/// framebuffer is never scaled onto the screen, so it stays 1x1.
pub struct GpuPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    fractal: FractalRenderer,
    width: u32,
    height: u32,
}

impl GpuPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(1, 1, surface_texture)?;

        let format = pixels.render_texture_format();
        info!("surface {}x{} using {:?}", size.width, size.height, format);

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            format,
            None, // depth format
            1,    // msaa samples
        );
        let fractal = FractalRenderer::new(pixels.device(), format);

        Ok(Self {
            pixels,
            egui_renderer,
            fractal,
            width: size.width,
            height: size.height,
        })
    }

    pub fn compiler(&mut self) -> RendererCompiler<'_> {
        RendererCompiler {
            device: self.pixels.device(),
            renderer: &mut self.fractal,
        }
    }

    pub fn fractal_mut(&mut self) -> &mut FractalRenderer {
        &mut self.fractal
    }

    /// Physical surface size, the space cursor positions arrive in.
    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            self.fractal.encode(&context.queue, encoder, render_target);

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
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
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
    }

    /// Releases the overlay before the fractal resources, and both before the surface.
    pub fn shutdown(self) {
        let Self {
            pixels,
            egui_renderer,
            fractal,
            ..
        } = self;

        drop(egui_renderer);
        info!("egui overlay detached");

        let programs = fractal.program_count();
        drop(fractal);
        info!("released {} fractal pipelines and the quad buffer", programs);

        drop(pixels);
        info!("render surface released");
    }
}
