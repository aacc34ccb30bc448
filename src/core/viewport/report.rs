#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomSource {
    Scroll,
    Keyboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanSource {
    Drag,
    Keyboard,
}

/// What one viewport update did to the parameter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportUpdateReport {
    pub scroll_zoomed: bool,
    pub key_zoomed: bool,
    pub dragged: bool,
    pub key_panned: bool,
    /// The zoom floor was hit by at least one zoom step.
    pub zoom_clamped: bool,
    pub drag_started: bool,
    pub drag_ended: bool,
}

impl ViewportUpdateReport {
    #[must_use]
    pub fn changed_view(&self) -> bool {
        self.scroll_zoomed || self.key_zoomed || self.dragged || self.key_panned
    }

    pub(crate) fn mark_zoom(&mut self, source: ZoomSource, clamped: bool) {
        match source {
            ZoomSource::Scroll => self.scroll_zoomed = true,
            ZoomSource::Keyboard => self.key_zoomed = true,
        }
        self.zoom_clamped |= clamped;
    }

    pub(crate) fn mark_pan(&mut self, source: PanSource) {
        match source {
            PanSource::Drag => self.dragged = true,
            PanSource::Keyboard => self.key_panned = true,
        }
    }
}
