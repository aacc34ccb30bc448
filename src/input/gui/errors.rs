use std::{error::Error, fmt};

use pixels::TextureError;
use winit::error::{EventLoopError, OsError};

use crate::controllers::frame::ShaderError;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Shader(ShaderError),
    Resize(TextureError),
    Render(pixels::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create render surface: {}", err),
            Self::Shader(err) => write!(f, "failed to build shader programs: {}", err),
            Self::Resize(err) => write!(f, "failed to resize render surface: {}", err),
            Self::Render(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) | Self::Render(err) => Some(err),
            Self::Shader(err) => Some(err),
            Self::Resize(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<ShaderError> for GuiError {
    fn from(err: ShaderError) -> Self {
        Self::Shader(err)
    }
}

impl From<TextureError> for GuiError {
    fn from(err: TextureError) -> Self {
        Self::Resize(err)
    }
}
