//! Fractal draw resources: one quad, one pipeline per shader program.
//!
//! The renderer is the GPU side of both core ports. Programs come in
//! through [`RendererCompiler`], uniform writes and draw requests through
//! [`UniformSink`], and the recorded frame is encoded when the presenter
//! has a surface texture to draw into.

use std::borrow::Cow;
use std::collections::HashSet;

use log::{debug, warn};
use pixels::wgpu;
use pixels::wgpu::util::DeviceExt;

use crate::controllers::frame::errors::shader::{ShaderError, ShaderStage};
use crate::controllers::frame::ports::{ProgramHandle, ShaderCompiler, UniformSink, UniformValue};
use crate::presenters::wgpu::uniforms::{Assignment, FractalUniforms};

const VERTEX_ENTRY: &str = "vs_main";
const FRAGMENT_ENTRY: &str = "fs_main";

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadVertex {
    position: [f32; 3],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Triangle strip covering clip space.
const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [-1.0, -1.0, 0.0] },
    QuadVertex { position: [1.0, -1.0, 0.0] },
    QuadVertex { position: [-1.0, 1.0, 0.0] },
    QuadVertex { position: [1.0, 1.0, 0.0] },
];

struct ProgramPipeline {
    label: String,
    pipeline: wgpu::RenderPipeline,
    uniforms: FractalUniforms,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct FractalRenderer {
    target_format: wgpu::TextureFormat,
    quad_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    programs: Vec<ProgramPipeline>,
    pending_draw: Option<ProgramHandle>,
    warned: HashSet<(ProgramHandle, String)>,
}

impl FractalRenderer {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractal-quad"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("fractal-uniforms-bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(FractalUniforms::SIZE),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("fractal-pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        Self {
            target_format,
            quad_buffer,
            bind_group_layout,
            pipeline_layout,
            programs: Vec::new(),
            pending_draw: None,
            warned: HashSet::new(),
        }
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Records the fractal pass into `encoder`. The target is cleared to
    /// black; the quad is drawn only if a draw was requested since the
    /// last call.
    pub fn encode(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) {
        let program = self
            .pending_draw
            .take()
            .and_then(|handle| self.programs.get(handle.id() as usize));

        if let Some(program) = program {
            queue.write_buffer(&program.uniform_buffer, 0, bytemuck::bytes_of(&program.uniforms));
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fractal"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        if let Some(program) = program {
            pass.set_pipeline(&program.pipeline);
            pass.set_bind_group(0, &program.bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        }
    }

    fn warn_once(&mut self, program: ProgramHandle, name: &str, problem: &str) {
        if self.warned.insert((program, name.to_string())) {
            let label = self
                .programs
                .get(program.id() as usize)
                .map_or("<unknown program>", |p| p.label.as_str());
            warn!("uniform {} {} in {}", name, problem, label);
        }
    }
}

impl UniformSink for FractalRenderer {
    fn set_uniform(&mut self, program: ProgramHandle, name: &str, value: UniformValue) {
        let outcome = match self.programs.get_mut(program.id() as usize) {
            Some(pipeline) => pipeline.uniforms.assign(name, value),
            None => Assignment::UnknownName,
        };

        match outcome {
            Assignment::Applied => {}
            Assignment::UnknownName => self.warn_once(program, name, "is not declared"),
            Assignment::TypeMismatch => self.warn_once(program, name, "has a different type"),
        }
    }

    fn draw_fullscreen_quad(&mut self, program: ProgramHandle) {
        self.pending_draw = Some(program);
    }
}

/// Builds pipelines on `device` and registers them with `renderer`.
pub struct RendererCompiler<'a> {
    pub device: &'a wgpu::Device,
    pub renderer: &'a mut FractalRenderer,
}

impl RendererCompiler<'_> {
    fn create_module(
        &self,
        label: &str,
        stage: ShaderStage,
        source: &str,
    ) -> Result<wgpu::ShaderModule, ShaderError> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} ({})", label, stage)),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        });

        match pollster::block_on(self.device.pop_error_scope()) {
            None => Ok(module),
            Some(err) => Err(ShaderError::Compile {
                program: label.to_string(),
                stage,
                log: err.to_string(),
            }),
        }
    }
}

impl ShaderCompiler for RendererCompiler<'_> {
    fn compile_and_link(
        &mut self,
        label: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramHandle, ShaderError> {
        let vertex = self.create_module(label, ShaderStage::Vertex, vertex_source)?;
        let fragment = self.create_module(label, ShaderStage::Fragment, fragment_source)?;

        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&self.renderer.pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: VERTEX_ENTRY,
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: FRAGMENT_ENTRY,
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.renderer.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(ShaderError::Link {
                program: label.to_string(),
                log: err.to_string(),
            });
        }

        let uniform_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: FractalUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.renderer.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let handle = ProgramHandle::new(self.renderer.programs.len() as u32);
        debug!("created pipeline for {} at slot {}", label, handle.id());

        self.renderer.programs.push(ProgramPipeline {
            label: label.to_string(),
            pipeline,
            uniforms: FractalUniforms::default(),
            uniform_buffer,
            bind_group,
        });

        Ok(handle)
    }
}
