use std::collections::VecDeque;
use std::time::{Duration, Instant};

use fractal_renderer::controllers::frame::ports::uniform_sink::{
    ESCAPE_RADIUS, FRAME_UNIFORMS, JULIA_CONSTANT, MAX_ITERATIONS, TRANSLATION, ZOOM_FACTOR,
};
use fractal_renderer::controllers::frame::ports::{
    InputSource, ProgramHandle, ShaderCompiler, UniformSink, UniformValue,
};
use fractal_renderer::controllers::frame::{ShaderError, ShaderStage};
use fractal_renderer::core::data::{Complex, Vec2};
use fractal_renderer::core::viewport::{GuiGates, HeldKeys, PointerButton};
use fractal_renderer::{
    FrameCommand, FrameDriver, InputSnapshot, RenderMode, ShaderPrograms, ShaderSources,
};

const EPSILON: f32 = 1e-5;
const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
const FRAME: Duration = Duration::from_millis(16);

fn assert_approx_eq(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} to be within {} of {}",
        actual,
        EPSILON,
        expected
    );
}

#[derive(Default)]
struct FakeCompiler {
    linked: Vec<String>,
    reject: Option<&'static str>,
}

impl ShaderCompiler for FakeCompiler {
    fn compile_and_link(
        &mut self,
        label: &str,
        vertex_source: &str,
        _fragment_source: &str,
    ) -> Result<ProgramHandle, ShaderError> {
        assert!(vertex_source.contains("vs_main"));

        if self.reject.is_some_and(|label_to_reject| label_to_reject == label) {
            return Err(ShaderError::Compile {
                program: label.to_string(),
                stage: ShaderStage::Fragment,
                log: "syntax error".to_string(),
            });
        }

        self.linked.push(label.to_string());
        Ok(ProgramHandle::new(10 + self.linked.len() as u32))
    }
}

#[derive(Default)]
struct FakeSink {
    uniforms: Vec<(ProgramHandle, String, UniformValue)>,
    draws: Vec<ProgramHandle>,
}

impl FakeSink {
    fn last_frame(&self) -> &[(ProgramHandle, String, UniformValue)] {
        let start = self.uniforms.len().saturating_sub(FRAME_UNIFORMS.len());
        &self.uniforms[start..]
    }

    fn last_value(&self, name: &str) -> UniformValue {
        self.last_frame()
            .iter()
            .find(|(_, uniform, _)| uniform == name)
            .map(|(_, _, value)| *value)
            .unwrap()
    }
}

impl UniformSink for FakeSink {
    fn set_uniform(&mut self, program: ProgramHandle, name: &str, value: UniformValue) {
        self.uniforms.push((program, name.to_string(), value));
    }

    fn draw_fullscreen_quad(&mut self, program: ProgramHandle) {
        self.draws.push(program);
    }
}

/// Plays back queued snapshots, then idles.
#[derive(Default)]
struct FakeInput {
    queued: VecDeque<InputSnapshot>,
}

impl FakeInput {
    fn push(&mut self, snapshot: InputSnapshot) {
        self.queued.push_back(snapshot);
    }
}

impl InputSource for FakeInput {
    fn snapshot(&mut self) -> InputSnapshot {
        self.queued.pop_front().unwrap_or(InputSnapshot {
            viewport_size: VIEWPORT,
            ..InputSnapshot::default()
        })
    }
}

fn idle() -> InputSnapshot {
    InputSnapshot {
        cursor: Vec2::new(400.0, 300.0),
        viewport_size: VIEWPORT,
        ..InputSnapshot::default()
    }
}

struct Harness {
    driver: FrameDriver,
    input: FakeInput,
    sink: FakeSink,
    now: Instant,
}

impl Harness {
    fn new() -> Self {
        let mut compiler = FakeCompiler::default();
        let programs = ShaderPrograms::build(&mut compiler, &ShaderSources::embedded()).unwrap();
        let now = Instant::now();

        Self {
            driver: FrameDriver::new(programs, now),
            input: FakeInput::default(),
            sink: FakeSink::default(),
            now,
        }
    }

    fn frame(&mut self, snapshot: InputSnapshot) {
        self.input.push(snapshot);
        self.now += FRAME;
        self.driver
            .advance_frame(self.now, &mut self.input, &mut self.sink);
    }
}

#[test]
fn builds_one_program_per_mode_from_embedded_sources() {
    let mut compiler = FakeCompiler::default();

    let programs = ShaderPrograms::build(&mut compiler, &ShaderSources::embedded()).unwrap();

    assert_eq!(compiler.linked, vec!["Julia Set Fractal", "Mandelbrot Set"]);
    assert_ne!(programs.julia, programs.mandelbrot);
}

#[test]
fn shader_failure_is_reported_with_diagnostics() {
    let mut compiler = FakeCompiler {
        reject: Some("Mandelbrot Set"),
        ..FakeCompiler::default()
    };

    let err = ShaderPrograms::build(&mut compiler, &ShaderSources::embedded()).unwrap_err();

    assert!(err.to_string().contains("Mandelbrot Set"));
    assert!(err.to_string().contains("syntax error"));
}

#[test]
fn every_frame_pushes_five_uniforms_then_draws() {
    let mut harness = Harness::new();

    harness.frame(idle());
    harness.frame(idle());

    assert_eq!(harness.sink.draws.len(), 2);
    assert_eq!(harness.sink.uniforms.len(), 10);
    let names: Vec<&str> = harness
        .sink
        .last_frame()
        .iter()
        .map(|(_, name, _)| name.as_str())
        .collect();
    assert_eq!(names, FRAME_UNIFORMS);
    assert_eq!(
        harness.sink.last_value(MAX_ITERATIONS),
        UniformValue::Int(200)
    );
    assert_eq!(
        harness.sink.last_value(ESCAPE_RADIUS),
        UniformValue::Float(100.0)
    );
    assert_eq!(harness.sink.last_value(ZOOM_FACTOR), UniformValue::Float(1.0));
}

#[test]
fn scroll_at_centre_zooms_without_moving() {
    let mut harness = Harness::new();

    harness.frame(InputSnapshot {
        scroll_y: 1.0,
        ..idle()
    });

    assert_approx_eq(harness.driver.params().zoom_factor(), 1.4);
    assert_eq!(harness.driver.params().translation(), Vec2::ZERO);
    match harness.sink.last_value(ZOOM_FACTOR) {
        UniformValue::Float(zoom) => assert_approx_eq(zoom, 1.4),
        other => panic!("unexpected zoom uniform {:?}", other),
    }
}

#[test]
fn zoom_never_drops_below_floor() {
    let mut harness = Harness::new();

    harness.frame(InputSnapshot {
        scroll_y: -3.0,
        ..idle()
    });
    assert_approx_eq(harness.driver.params().zoom_factor(), 0.1);

    for _ in 0..20 {
        harness.frame(InputSnapshot {
            scroll_y: -5.0,
            keys: HeldKeys {
                down: true,
                ..HeldKeys::default()
            },
            ..idle()
        });
        assert!(harness.driver.params().zoom_factor() >= 0.1);
    }
}

#[test]
fn holding_d_for_three_frames_pans_right() {
    let mut harness = Harness::new();
    let d = InputSnapshot {
        keys: HeldKeys {
            d: true,
            ..HeldKeys::default()
        },
        ..idle()
    };

    harness.frame(d);
    harness.frame(d);
    harness.frame(d);

    assert_approx_eq(harness.driver.params().translation().x, 0.03);
    assert_approx_eq(harness.driver.params().translation().y, 0.0);
}

#[test]
fn drag_moves_translation_against_the_cursor() {
    let mut harness = Harness::new();

    harness.frame(InputSnapshot {
        cursor: Vec2::new(100.0, 100.0),
        left_button: PointerButton {
            pressed: true,
            held: true,
            ..PointerButton::default()
        },
        ..idle()
    });
    harness.frame(InputSnapshot {
        cursor: Vec2::new(110.0, 95.0),
        left_button: PointerButton {
            held: true,
            ..PointerButton::default()
        },
        ..idle()
    });

    let translation = harness.driver.params().translation();
    assert_approx_eq(translation.x, -0.1);
    assert_approx_eq(translation.y, -0.05);
    match harness.sink.last_value(TRANSLATION) {
        UniformValue::Vec2([x, y]) => {
            assert_approx_eq(x, -0.1);
            assert_approx_eq(y, -0.05);
        }
        other => panic!("unexpected translation uniform {:?}", other),
    }
}

#[test]
fn scroll_over_the_panel_is_ignored() {
    let mut harness = Harness::new();

    harness.frame(InputSnapshot {
        scroll_y: 2.0,
        gui: GuiGates {
            pointer_over_gui: true,
            gui_has_focus: false,
        },
        ..idle()
    });

    assert_eq!(harness.driver.params().zoom_factor(), 1.0);
}

#[test]
fn zero_speed_keeps_the_user_constant() {
    let mut harness = Harness::new();
    let chosen = Complex::new(0.285, 0.01);
    harness.driver.params_mut().set_speed_factor(0.0);
    harness.driver.params_mut().set_julia_constant(chosen);

    for _ in 0..50 {
        harness.frame(idle());
    }

    assert_eq!(harness.driver.params().julia_constant(), chosen);
    assert_eq!(
        harness.sink.last_value(JULIA_CONSTANT),
        UniformValue::Vec2([0.285, 0.01])
    );
}

#[test]
fn julia_constant_animates_with_positive_speed() {
    let mut harness = Harness::new();

    harness.now += Duration::from_secs(5);
    harness.frame(idle());

    assert_ne!(
        harness.driver.params().julia_constant(),
        Complex::new(-0.8, 0.156)
    );
}

#[test]
fn switching_mode_changes_program_and_stops_animation() {
    let mut harness = Harness::new();
    let programs = harness.driver.programs();

    harness
        .driver
        .submit(FrameCommand::SwitchMode(RenderMode::Mandelbrot));
    harness.frame(idle());
    let frozen = harness.driver.params().julia_constant();
    harness.now += Duration::from_secs(3);
    harness.frame(idle());

    assert_eq!(harness.driver.params().render_mode(), RenderMode::Mandelbrot);
    assert_eq!(harness.sink.draws.last(), Some(&programs.mandelbrot));
    assert!(
        harness
            .sink
            .last_frame()
            .iter()
            .all(|(program, _, _)| *program == programs.mandelbrot)
    );
    assert_eq!(harness.driver.params().julia_constant(), frozen);
}

#[test]
fn reset_restores_defaults_and_restarts_clock() {
    let mut harness = Harness::new();
    harness.driver.params_mut().set_max_iterations(900);
    harness
        .driver
        .submit(FrameCommand::SwitchMode(RenderMode::Mandelbrot));
    harness.frame(InputSnapshot {
        scroll_y: 2.0,
        cursor: Vec2::new(700.0, 100.0),
        ..idle()
    });
    harness.now += Duration::from_secs(10);

    harness.driver.submit(FrameCommand::Reset);
    harness.driver.submit(FrameCommand::Reset);
    harness.frame(idle());

    let params = harness.driver.params();
    assert_eq!(params.max_iterations(), 200);
    assert_eq!(params.zoom_factor(), 1.0);
    assert_eq!(params.translation(), Vec2::ZERO);
    assert_eq!(params.render_mode(), RenderMode::Julia);
    assert!(params.elapsed_seconds(harness.now) < 0.001);
    assert_eq!(
        harness.sink.draws.last(),
        Some(&harness.driver.programs().julia)
    );
}
