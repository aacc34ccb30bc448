use egui::Context;

use crate::controllers::frame::ports::InputSource;
use crate::core::data::Vec2;
use crate::core::viewport::{GuiGates, InputSnapshot};
use crate::input::gui::input_state::WinitInputState;

/// Reads the gating flags from the egui frame that just ran.
#[must_use]
pub fn gui_gates(ctx: &Context) -> GuiGates {
    GuiGates {
        pointer_over_gui: ctx.is_pointer_over_area(),
        gui_has_focus: ctx.is_using_pointer() || ctx.wants_keyboard_input(),
    }
}

/// Winit events plus egui gates, seen through the frame driver's port.
pub struct GuiInputSource<'a> {
    pub state: &'a mut WinitInputState,
    pub gates: GuiGates,
    pub viewport_size: Vec2,
}

impl InputSource for GuiInputSource<'_> {
    fn snapshot(&mut self) -> InputSnapshot {
        self.state.snapshot(self.viewport_size, self.gates)
    }
}
