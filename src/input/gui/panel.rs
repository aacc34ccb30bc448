use egui::{Context, Slider, Ui};

use crate::controllers::frame::FrameCommand;
use crate::core::data::Complex;
use crate::core::params::bounds::{
    ESCAPE_RADIUS_RANGE, JULIA_COMPONENT_RANGE, MAX_ITERATIONS_RANGE, SPEED_FACTOR_RANGE,
};
use crate::core::params::{ParameterState, RenderMode};

pub const PANEL_TITLE: &str = "Fractal Set Controls";

/// What the user asked for this frame, beyond direct parameter edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Command(FrameCommand),
    Exit,
}

/// Draws the control window. Slider edits go straight into `params`
/// through its bounded setters; mode switches, reset and exit come back
/// as actions for the caller to route.
pub fn show_control_panel(
    ctx: &Context,
    params: &mut ParameterState,
    elapsed_seconds: f64,
) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    egui::Window::new(PANEL_TITLE)
        .default_pos([10.0, 10.0])
        .default_size([320.0, 260.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for mode in [RenderMode::Mandelbrot, RenderMode::Julia] {
                    if ui.button(mode.display_name()).clicked() {
                        actions.push(PanelAction::Command(FrameCommand::SwitchMode(mode)));
                    }
                }
            });

            let mut max_iterations = params.max_iterations();
            if ui
                .add(Slider::new(&mut max_iterations, MAX_ITERATIONS_RANGE).text("Max Iterations"))
                .changed()
            {
                params.set_max_iterations(max_iterations);
            }

            let mut escape_radius = params.escape_radius();
            if ui
                .add(Slider::new(&mut escape_radius, ESCAPE_RADIUS_RANGE).text("Escape Radius"))
                .changed()
            {
                params.set_escape_radius(escape_radius);
            }

            if params.render_mode().uses_julia_constant() {
                julia_controls(ui, params);
            }

            ui.label(format!("Zoom: {:.3}", params.zoom_factor()));
            ui.label(format!("TranslationX: {:.5}", params.translation().x));
            ui.label(format!("TranslationY: {:.5}", params.translation().y));
            ui.label(format!("Time Elapsed: {:.3}", elapsed_seconds as f32));

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    actions.push(PanelAction::Command(FrameCommand::Reset));
                }
                if ui.button("Exit").clicked() {
                    actions.push(PanelAction::Exit);
                }
            });
        });

    actions
}

fn julia_controls(ui: &mut Ui, params: &mut ParameterState) {
    let mut speed_factor = params.speed_factor();
    if ui
        .add(Slider::new(&mut speed_factor, SPEED_FACTOR_RANGE).text("Animation Speed"))
        .changed()
    {
        params.set_speed_factor(speed_factor);
    }

    let Complex { mut real, mut imag } = params.julia_constant();
    let real_changed = ui
        .add(Slider::new(&mut real, JULIA_COMPONENT_RANGE).text("Julia Constant (Real)"))
        .changed();
    let imag_changed = ui
        .add(Slider::new(&mut imag, JULIA_COMPONENT_RANGE).text("Julia Constant (Imaginary)"))
        .changed();
    if real_changed || imag_changed {
        params.set_julia_constant(Complex::new(real, imag));
    }

    ui.label(format!("Julia Const (Real): {:.3}", real));
    ui.label(format!("Julia Const (Imag): {:.3}", imag));
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::RawInput;
    use std::time::Instant;

    #[test]
    fn idle_frame_emits_no_actions_and_keeps_params() {
        let ctx = Context::default();
        let mut params = ParameterState::new(Instant::now());
        let before = params.clone();
        let mut actions = Vec::new();

        let _ = ctx.run(RawInput::default(), |ctx| {
            actions = show_control_panel(ctx, &mut params, 1.5);
        });

        assert!(actions.is_empty());
        assert_eq!(params, before);
    }

    #[test]
    fn mandelbrot_mode_panel_leaves_julia_state_alone() {
        let ctx = Context::default();
        let mut params = ParameterState::new(Instant::now());
        params.set_render_mode(RenderMode::Mandelbrot);
        let before = params.clone();

        let _ = ctx.run(RawInput::default(), |ctx| {
            show_control_panel(ctx, &mut params, 0.0);
        });

        assert_eq!(params.julia_constant(), before.julia_constant());
        assert_eq!(params.speed_factor(), before.speed_factor());
    }
}
