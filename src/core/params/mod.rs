pub mod bounds;
pub mod parameter_state;
pub mod render_mode;

pub use parameter_state::ParameterState;
pub use render_mode::RenderMode;
