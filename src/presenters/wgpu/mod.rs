pub mod presenter;
pub mod renderer;
pub mod uniforms;

pub use presenter::GpuPresenter;
pub use renderer::{FractalRenderer, RendererCompiler};
pub use uniforms::FractalUniforms;
