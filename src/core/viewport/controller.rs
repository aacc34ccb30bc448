use log::debug;

use crate::core::data::Vec2;
use crate::core::params::ParameterState;
use crate::core::viewport::drag::DragSession;
use crate::core::viewport::input::InputSnapshot;
use crate::core::viewport::report::{PanSource, ViewportUpdateReport, ZoomSource};
use crate::core::viewport::transform::cursor_to_zoom_origin;
use crate::core::viewport::tuning::ViewportTuning;

/// Turns one frame of raw input into zoom and pan on a [`ParameterState`].
///
/// Zoom moves toward the cursor: a scroll step of `delta` adds `delta` to the
/// zoom factor and `origin * delta` to the translation, where `origin` is the
/// cursor re-centred onto `[-1, 1]²`. The arrow keys always add
/// `origin * key_zoom_step`, so Down zooms out but still drifts toward the
/// cursor. The zoom floor is applied afterwards and the translation from
/// that same step is kept even when the floor kicks in.
///
/// Handlers run in a fixed order: scroll zoom, key zoom, drag pan, key pan.
/// Everything except scroll zoom is skipped while a GUI control has focus.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    tuning: ViewportTuning,
    drag: Option<DragSession>,
}

impl ViewportController {
    #[must_use]
    pub fn new(tuning: ViewportTuning) -> Self {
        Self { tuning, drag: None }
    }

    #[must_use]
    pub fn tuning(&self) -> &ViewportTuning {
        &self.tuning
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn update(
        &mut self,
        params: &mut ParameterState,
        input: &InputSnapshot,
    ) -> ViewportUpdateReport {
        let mut report = ViewportUpdateReport::default();
        let origin = cursor_to_zoom_origin(input.cursor, input.viewport_size);

        if input.scroll_y != 0.0 && !input.gui.pointer_over_gui {
            let delta = input.scroll_y * self.tuning.scroll_zoom_scale;
            self.zoom(params, delta, origin * delta, ZoomSource::Scroll, &mut report);
        }

        if input.gui.gui_has_focus {
            return report;
        }

        // Both arrows pan toward the cursor; only the zoom direction differs.
        let step = self.tuning.key_zoom_step;
        if input.keys.up {
            self.zoom(params, step, origin * step, ZoomSource::Keyboard, &mut report);
        } else if input.keys.down {
            self.zoom(params, -step, origin * step, ZoomSource::Keyboard, &mut report);
        }

        self.drag(params, input, &mut report);
        self.key_pan(params, input, &mut report);

        report
    }

    fn zoom(
        &self,
        params: &mut ParameterState,
        delta: f32,
        offset: Vec2,
        source: ZoomSource,
        report: &mut ViewportUpdateReport,
    ) {
        params.translate(offset);
        let clamped = params.offset_zoom(delta);

        if clamped {
            debug!(
                "zoom clamped to {} after {:?} delta {}",
                params.zoom_factor(),
                source,
                delta
            );
        }

        report.mark_zoom(source, clamped);
    }

    fn drag(
        &mut self,
        params: &mut ParameterState,
        input: &InputSnapshot,
        report: &mut ViewportUpdateReport,
    ) {
        let button = input.left_button;

        if button.released {
            if self.drag.take().is_some() {
                report.drag_ended = true;
            }
        } else if button.pressed {
            if !input.gui.pointer_over_gui {
                self.drag = Some(DragSession::start(input.cursor));
                report.drag_started = true;
            }
        } else if button.held {
            if let Some(session) = self.drag.as_mut() {
                let moved = session.advance(input.cursor);

                if moved != Vec2::ZERO {
                    // x and y pan in opposite senses relative to the cursor
                    params.translate(Vec2 {
                        x: -moved.x * self.tuning.drag_pan_scale,
                        y: moved.y * self.tuning.drag_pan_scale,
                    });
                    report.mark_pan(PanSource::Drag);
                }
            }
        }
    }

    fn key_pan(
        &self,
        params: &mut ParameterState,
        input: &InputSnapshot,
        report: &mut ViewportUpdateReport,
    ) {
        let step = self.tuning.key_pan_step;
        let keys = input.keys;

        let offset = if keys.w {
            Vec2::new(0.0, step)
        } else if keys.s {
            Vec2::new(0.0, -step)
        } else if keys.a {
            Vec2::new(-step, 0.0)
        } else if keys.d {
            Vec2::new(step, 0.0)
        } else {
            return;
        };

        params.translate(offset);
        report.mark_pan(PanSource::Keyboard);
    }
}
