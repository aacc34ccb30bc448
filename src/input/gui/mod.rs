//! Interactive window: winit event loop, egui control panel and the input
//! adapter feeding the frame driver.

pub mod app;
pub mod commands;
pub mod config;
pub mod errors;
pub mod input_source;
pub mod input_state;
pub mod panel;

pub use commands::run_gui::RunGuiCommand;
pub use config::ViewerConfig;
pub use errors::GuiError;
