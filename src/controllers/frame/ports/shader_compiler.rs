use crate::controllers::frame::errors::shader::ShaderError;

/// Opaque id of a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(u32);

impl ProgramHandle {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }
}

pub trait ShaderCompiler {
    /// Compiles both stages and links them into a program.
    ///
    /// `label` names the program in diagnostics.
    fn compile_and_link(
        &mut self,
        label: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramHandle, ShaderError>;
}
