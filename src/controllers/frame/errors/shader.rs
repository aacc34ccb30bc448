use std::{error::Error, fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    Io { path: PathBuf, message: String },
    Compile { program: String, stage: ShaderStage, log: String },
    Link { program: String, log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read shader {}: {}", path.display(), message)
            }
            Self::Compile { program, stage, log } => {
                write!(f, "{} shader compilation failed for {}:\n{}", stage, program, log)
            }
            Self::Link { program, log } => {
                write!(f, "shader program linking failed for {}:\n{}", program, log)
            }
        }
    }
}

impl Error for ShaderError {}
