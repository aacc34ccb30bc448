pub mod controller;
pub mod drag;
pub mod input;
pub mod report;
pub mod transform;
pub mod tuning;

pub use controller::ViewportController;
pub use drag::DragSession;
pub use input::{GuiGates, HeldKeys, InputSnapshot, PointerButton};
pub use report::ViewportUpdateReport;
pub use transform::{cursor_to_ndc, cursor_to_zoom_origin};
pub use tuning::ViewportTuning;
