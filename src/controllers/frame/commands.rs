use crate::core::params::RenderMode;

/// Requests from the control surface, applied at the start of the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCommand {
    /// Select the fractal family and its shader program. Leaves the view untouched.
    SwitchMode(RenderMode),
    /// Restore every parameter default and restart the animation clock.
    Reset,
}
