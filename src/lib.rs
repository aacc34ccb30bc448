pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod presenters;

pub use crate::controllers::frame::{
    FrameCommand, FrameDriver, FrameReport, ShaderPrograms, ShaderSources,
};
pub use crate::core::animation::JuliaAnimator;
pub use crate::core::params::{ParameterState, RenderMode};
pub use crate::core::viewport::{InputSnapshot, ViewportController};

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, RunGuiCommand, ViewerConfig};
