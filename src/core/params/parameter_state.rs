use std::time::Instant;

use crate::core::data::{Complex, Vec2};
use crate::core::params::bounds::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS, DEFAULT_SPEED_FACTOR,
    DEFAULT_TRANSLATION, DEFAULT_ZOOM_FACTOR, ESCAPE_RADIUS_RANGE, JULIA_COMPONENT_RANGE,
    MAX_ITERATIONS_RANGE, MIN_ZOOM_FACTOR, SPEED_FACTOR_RANGE,
};
use crate::core::params::render_mode::RenderMode;

/// Every numeric viewport and fractal parameter the shaders read.
///
/// One instance lives for the whole process. Public setters clamp to the
/// same ranges the control panel offers; zoom and translation only move
/// through the viewport controller, which keeps `zoom_factor >= 0.1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterState {
    max_iterations: i32,
    escape_radius: f32,
    julia_constant: Complex,
    zoom_factor: f32,
    translation: Vec2,
    speed_factor: f32,
    render_mode: RenderMode,
    animation_start_time: Instant,
}

impl ParameterState {
    #[must_use]
    pub fn new(started_at: Instant) -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            translation: DEFAULT_TRANSLATION,
            speed_factor: DEFAULT_SPEED_FACTOR,
            render_mode: RenderMode::default(),
            animation_start_time: started_at,
        }
    }

    /// Restores every field to its default and restarts the animation clock.
    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    #[must_use]
    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f32 {
        self.escape_radius
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    #[must_use]
    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    #[must_use]
    pub fn animation_start_time(&self) -> Instant {
        self.animation_start_time
    }

    /// Seconds since the last reset, zero if `now` precedes it.
    #[must_use]
    pub fn elapsed_seconds(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.animation_start_time)
            .as_secs_f64()
    }

    pub fn set_max_iterations(&mut self, max_iterations: i32) {
        self.max_iterations =
            max_iterations.clamp(*MAX_ITERATIONS_RANGE.start(), *MAX_ITERATIONS_RANGE.end());
    }

    pub fn set_escape_radius(&mut self, escape_radius: f32) {
        self.escape_radius =
            escape_radius.clamp(*ESCAPE_RADIUS_RANGE.start(), *ESCAPE_RADIUS_RANGE.end());
    }

    pub fn set_julia_constant(&mut self, julia_constant: Complex) {
        self.julia_constant = julia_constant
            .clamp_components(*JULIA_COMPONENT_RANGE.start(), *JULIA_COMPONENT_RANGE.end());
    }

    pub fn set_speed_factor(&mut self, speed_factor: f32) {
        self.speed_factor =
            speed_factor.clamp(*SPEED_FACTOR_RANGE.start(), *SPEED_FACTOR_RANGE.end());
    }

    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    // The animator may leave the [-2, 2] editing range.
    pub(crate) fn set_animated_julia_constant(&mut self, julia_constant: Complex) {
        self.julia_constant = julia_constant;
    }

    /// Adds `delta` to the zoom factor, then applies the floor.
    ///
    /// Returns whether the floor was hit.
    pub(crate) fn offset_zoom(&mut self, delta: f32) -> bool {
        self.zoom_factor += delta;

        if self.zoom_factor < MIN_ZOOM_FACTOR {
            self.zoom_factor = MIN_ZOOM_FACTOR;
            return true;
        }

        false
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.translation += offset;
    }
}
