use std::time::Instant;

use egui::Context;
use egui_winit::{EventResponse, State as EguiWinitState};
use log::{info, trace};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::frame::{FrameDriver, ShaderPrograms, ShaderSources};
use crate::input::gui::errors::GuiError;
use crate::input::gui::input_source::{gui_gates, GuiInputSource};
use crate::input::gui::input_state::WinitInputState;
use crate::input::gui::panel::{show_control_panel, PanelAction};
use crate::presenters::wgpu::GpuPresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawOutcome {
    Continue,
    ExitRequested,
}

pub struct GuiApp {
    window: &'static Window,
    presenter: GpuPresenter,
    driver: FrameDriver,
    input: WinitInputState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    /// Creates the surface, builds both shader programs and starts the
    /// animation clock at `now`.
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        sources: &ShaderSources,
        now: Instant,
    ) -> Result<Self, GuiError> {
        let mut presenter = GpuPresenter::new(window).map_err(GuiError::Surface)?;
        let programs = ShaderPrograms::build(&mut presenter.compiler(), sources)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            presenter,
            driver: FrameDriver::new(programs, now),
            input: WinitInputState::default(),
            egui_ctx,
            egui_state,
        })
    }

    /// Feeds the event to egui and to the fractal input state. Gating by
    /// egui happens per frame, not per event, so both always see it.
    ///
    /// Returns true if egui consumed the event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(self.window, event);
        self.input.handle_window_event(event);
        egui_consumed(event, response)
    }

    /// Runs one full frame: control panel, commands, frame driver, present.
    pub fn redraw(&mut self, now: Instant) -> Result<RedrawOutcome, GuiError> {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let elapsed_seconds = self.driver.params().elapsed_seconds(now);

        let mut actions = Vec::new();
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            actions = show_control_panel(ctx, self.driver.params_mut(), elapsed_seconds);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        for action in actions {
            match action {
                PanelAction::Command(command) => self.driver.submit(command),
                PanelAction::Exit => return Ok(RedrawOutcome::ExitRequested),
            }
        }

        let mut input = GuiInputSource {
            state: &mut self.input,
            gates: gui_gates(&self.egui_ctx),
            viewport_size: self.presenter.viewport_size(),
        };
        let report = self
            .driver
            .advance_frame(now, &mut input, self.presenter.fractal_mut());
        trace!("frame {} viewport {:?}", report.frame_index, report.viewport);

        self.presenter
            .render(egui_output, &self.egui_ctx)
            .map_err(GuiError::Render)?;

        Ok(RedrawOutcome::Continue)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize(width, height)?;
        Ok(())
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
    }

    /// Detaches the overlay, then releases GPU resources.
    pub fn shutdown(self) {
        let Self {
            presenter,
            egui_ctx,
            egui_state,
            ..
        } = self;

        drop(egui_state);
        drop(egui_ctx);
        info!("egui input state released");

        presenter.shutdown();
    }
}

fn egui_consumed(event: &WindowEvent, response: EventResponse) -> bool {
    if response.consumed {
        trace!("egui consumed {:?}", event);
    }
    response.consumed
}
