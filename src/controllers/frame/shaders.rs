use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::controllers::frame::errors::shader::ShaderError;
use crate::controllers::frame::ports::{ProgramHandle, ShaderCompiler};
use crate::core::params::RenderMode;

pub const VERTEX_FILE: &str = "quad_vertex.wgsl";
pub const JULIA_FRAGMENT_FILE: &str = "julia_fragment.wgsl";
pub const MANDELBROT_FRAGMENT_FILE: &str = "mandelbrot_fragment.wgsl";

/// WGSL sources for both render modes. The quad vertex stage is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub julia_fragment: String,
    pub mandelbrot_fragment: String,
}

impl ShaderSources {
    /// Sources compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            vertex: include_str!("../../shaders/quad_vertex.wgsl").to_string(),
            julia_fragment: include_str!("../../shaders/julia_fragment.wgsl").to_string(),
            mandelbrot_fragment: include_str!("../../shaders/mandelbrot_fragment.wgsl")
                .to_string(),
        }
    }

    /// Reads the three shader files from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ShaderError> {
        Ok(Self {
            vertex: read_source(&dir.join(VERTEX_FILE))?,
            julia_fragment: read_source(&dir.join(JULIA_FRAGMENT_FILE))?,
            mandelbrot_fragment: read_source(&dir.join(MANDELBROT_FRAGMENT_FILE))?,
        })
    }

    #[must_use]
    pub fn fragment_for(&self, mode: RenderMode) -> &str {
        match mode {
            RenderMode::Julia => &self.julia_fragment,
            RenderMode::Mandelbrot => &self.mandelbrot_fragment,
        }
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|err| ShaderError::Io {
        path: PathBuf::from(path),
        message: err.to_string(),
    })
}

/// One linked program per render mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderPrograms {
    pub julia: ProgramHandle,
    pub mandelbrot: ProgramHandle,
}

impl ShaderPrograms {
    /// Builds both programs; the first failure aborts.
    pub fn build<C: ShaderCompiler>(
        compiler: &mut C,
        sources: &ShaderSources,
    ) -> Result<Self, ShaderError> {
        let julia = compile_mode(compiler, sources, RenderMode::Julia)?;
        let mandelbrot = compile_mode(compiler, sources, RenderMode::Mandelbrot)?;

        Ok(Self { julia, mandelbrot })
    }

    #[must_use]
    pub fn for_mode(&self, mode: RenderMode) -> ProgramHandle {
        match mode {
            RenderMode::Julia => self.julia,
            RenderMode::Mandelbrot => self.mandelbrot,
        }
    }
}

fn compile_mode<C: ShaderCompiler>(
    compiler: &mut C,
    sources: &ShaderSources,
    mode: RenderMode,
) -> Result<ProgramHandle, ShaderError> {
    let label = mode.display_name();

    match compiler.compile_and_link(label, &sources.vertex, sources.fragment_for(mode)) {
        Ok(handle) => {
            debug!("linked {} program as {:?}", label, handle);
            Ok(handle)
        }
        Err(err) => {
            error!("{}", err);
            Err(err)
        }
    }
}
