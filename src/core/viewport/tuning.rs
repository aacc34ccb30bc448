use crate::core::params::bounds::MIN_ZOOM_FACTOR;

/// Gains applied to raw input before it reaches the parameter state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTuning {
    /// Zoom delta per scroll line.
    pub scroll_zoom_scale: f32,
    /// Zoom delta per frame while Up or Down is held.
    pub key_zoom_step: f32,
    pub min_zoom_factor: f32,
    /// Translation per pixel of drag.
    pub drag_pan_scale: f32,
    /// Translation per frame while W/A/S/D is held.
    pub key_pan_step: f32,
}

impl Default for ViewportTuning {
    fn default() -> Self {
        Self {
            scroll_zoom_scale: 0.4,
            key_zoom_step: 0.05,
            min_zoom_factor: MIN_ZOOM_FACTOR,
            drag_pan_scale: 0.01,
            key_pan_step: 0.01,
        }
    }
}
