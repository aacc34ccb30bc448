//! Frame orchestration for the real-time renderer.
//!
//! The driver owns the parameter state and, once per frame, animates the
//! Julia constant, feeds input to the viewport controller and pushes the
//! resulting uniforms to the active shader program.
//!
//! # Architecture
//!
//! Ports & adapters, as elsewhere in the crate:
//! - **Input**: [`InputSource`](ports::InputSource) snapshots and queued [`FrameCommand`]s
//! - **Output**: [`UniformSink`](ports::UniformSink) uniform writes and the quad draw
//! - **Startup**: [`ShaderCompiler`](ports::ShaderCompiler) builds the two programs

mod commands;
mod driver;
pub mod errors;
pub mod ports;
pub mod shaders;

pub use commands::FrameCommand;
pub use driver::{FrameDriver, FrameReport};
pub use errors::shader::{ShaderError, ShaderStage};
pub use shaders::{ShaderPrograms, ShaderSources};
