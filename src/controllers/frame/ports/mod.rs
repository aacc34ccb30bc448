//! Port definitions for the frame driver.
//!
//! Traits the driver consumes to reach the GPU, the shader toolchain and
//! the input devices. The `gui` feature supplies wgpu and winit adapters;
//! tests substitute fakes.

pub mod input_source;
pub mod shader_compiler;
pub mod uniform_sink;

pub use input_source::InputSource;
pub use shader_compiler::{ProgramHandle, ShaderCompiler};
pub use uniform_sink::{UniformSink, UniformValue};
