use std::time::Instant;

use log::{info, trace};

use crate::controllers::frame::commands::FrameCommand;
use crate::controllers::frame::ports::uniform_sink::{
    ESCAPE_RADIUS, JULIA_CONSTANT, MAX_ITERATIONS, TRANSLATION, ZOOM_FACTOR,
};
use crate::controllers::frame::ports::{InputSource, ProgramHandle, UniformSink, UniformValue};
use crate::controllers::frame::shaders::ShaderPrograms;
use crate::core::animation::JuliaAnimator;
use crate::core::params::{ParameterState, RenderMode};
use crate::core::viewport::{ViewportController, ViewportUpdateReport};

/// Outcome of one [`FrameDriver::advance_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame_index: u64,
    pub elapsed_seconds: f64,
    /// The Julia constant was recomputed from time this frame.
    pub animated: bool,
    pub viewport: ViewportUpdateReport,
    pub program: ProgramHandle,
}

/// Owns the parameter state and runs the fixed per-frame sequence:
///
/// 1. apply queued [`FrameCommand`]s
/// 2. measure time since the last reset
/// 3. animate the Julia constant (Julia mode with a positive speed only)
/// 4. take an input snapshot and let the viewport controller consume it
/// 5. push the five frame uniforms to the active program
/// 6. draw the full-screen quad
#[derive(Debug)]
pub struct FrameDriver {
    params: ParameterState,
    animator: JuliaAnimator,
    viewport: ViewportController,
    programs: ShaderPrograms,
    pending: Vec<FrameCommand>,
    frame_index: u64,
}

impl FrameDriver {
    #[must_use]
    pub fn new(programs: ShaderPrograms, now: Instant) -> Self {
        Self::with_parts(
            programs,
            JuliaAnimator::default(),
            ViewportController::default(),
            now,
        )
    }

    #[must_use]
    pub fn with_parts(
        programs: ShaderPrograms,
        animator: JuliaAnimator,
        viewport: ViewportController,
        now: Instant,
    ) -> Self {
        Self {
            params: ParameterState::new(now),
            animator,
            viewport,
            programs,
            pending: Vec::new(),
            frame_index: 0,
        }
    }

    #[must_use]
    pub fn params(&self) -> &ParameterState {
        &self.params
    }

    /// Direct access for bounded edits from the control panel.
    pub fn params_mut(&mut self) -> &mut ParameterState {
        &mut self.params
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn programs(&self) -> ShaderPrograms {
        self.programs
    }

    #[must_use]
    pub fn active_program(&self) -> ProgramHandle {
        self.programs.for_mode(self.params.render_mode())
    }

    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Queues a command for the start of the next frame.
    pub fn submit(&mut self, command: FrameCommand) {
        self.pending.push(command);
    }

    pub fn advance_frame<I, S>(&mut self, now: Instant, input: &mut I, sink: &mut S) -> FrameReport
    where
        I: InputSource + ?Sized,
        S: UniformSink + ?Sized,
    {
        self.apply_pending(now);

        let elapsed_seconds = self.params.elapsed_seconds(now);
        let animated = self.animate(elapsed_seconds);

        let snapshot = input.snapshot();
        let viewport = self.viewport.update(&mut self.params, &snapshot);

        let program = self.active_program();
        self.push_uniforms(program, sink);
        sink.draw_fullscreen_quad(program);

        let report = FrameReport {
            frame_index: self.frame_index,
            elapsed_seconds,
            animated,
            viewport,
            program,
        };

        trace!(
            "frame {} t={:.3}s zoom={} translation={:?}",
            self.frame_index,
            elapsed_seconds,
            self.params.zoom_factor(),
            self.params.translation()
        );

        self.frame_index += 1;
        report
    }

    fn apply_pending(&mut self, now: Instant) {
        for command in std::mem::take(&mut self.pending) {
            match command {
                FrameCommand::SwitchMode(mode) => {
                    if mode != self.params.render_mode() {
                        info!("switching to {}", mode.display_name());
                        self.params.set_render_mode(mode);
                    }
                }
                FrameCommand::Reset => {
                    info!("resetting parameters to defaults");
                    self.params.reset(now);
                }
            }
        }
    }

    fn animate(&mut self, elapsed_seconds: f64) -> bool {
        if self.params.render_mode() != RenderMode::Julia {
            return false;
        }

        match self
            .animator
            .update(elapsed_seconds, self.params.speed_factor())
        {
            Some(constant) => {
                self.params.set_animated_julia_constant(constant);
                true
            }
            None => false,
        }
    }

    fn push_uniforms<S: UniformSink + ?Sized>(&self, program: ProgramHandle, sink: &mut S) {
        let params = &self.params;

        sink.set_uniform(
            program,
            JULIA_CONSTANT,
            UniformValue::Vec2(params.julia_constant().to_array()),
        );
        sink.set_uniform(
            program,
            MAX_ITERATIONS,
            UniformValue::Int(params.max_iterations()),
        );
        sink.set_uniform(
            program,
            ESCAPE_RADIUS,
            UniformValue::Float(params.escape_radius()),
        );
        sink.set_uniform(
            program,
            ZOOM_FACTOR,
            UniformValue::Float(params.zoom_factor()),
        );
        sink.set_uniform(
            program,
            TRANSLATION,
            UniformValue::Vec2(params.translation().to_array()),
        );
    }
}
