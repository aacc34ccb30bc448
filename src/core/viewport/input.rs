use crate::core::data::Vec2;

/// Keys the viewport reacts to, sampled as "currently held".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
}

/// Left mouse button as seen during one frame.
///
/// `pressed` and `released` are edges: true only in the frame the
/// transition happened. `held` is level-triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButton {
    pub pressed: bool,
    pub released: bool,
    pub held: bool,
}

/// Gating flags owned by the GUI overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuiGates {
    /// The pointer is over a control surface.
    pub pointer_over_gui: bool,
    /// A control is active or holds keyboard focus.
    pub gui_has_focus: bool,
}

/// Everything the viewport controller reads in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Wheel movement since the previous frame, in lines. Positive zooms in.
    pub scroll_y: f32,
    pub keys: HeldKeys,
    /// Cursor position in pixels, origin at the top-left corner.
    pub cursor: Vec2,
    /// Drawable size in pixels.
    pub viewport_size: Vec2,
    pub left_button: PointerButton,
    pub gui: GuiGates,
}
