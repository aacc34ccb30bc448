use std::time::{Duration, Instant};

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use fractal_renderer::controllers::frame::ports::{
    InputSource, ProgramHandle, UniformSink, UniformValue,
};
use fractal_renderer::core::data::Vec2;
use fractal_renderer::core::viewport::{HeldKeys, PointerButton};
use fractal_renderer::{
    FrameDriver, InputSnapshot, JuliaAnimator, ParameterState, ShaderPrograms, ViewportController,
};

struct NullSink;

impl UniformSink for NullSink {
    fn set_uniform(&mut self, _program: ProgramHandle, _name: &str, value: UniformValue) {
        black_box(value);
    }

    fn draw_fullscreen_quad(&mut self, program: ProgramHandle) {
        black_box(program);
    }
}

struct Repeat(InputSnapshot);

impl InputSource for Repeat {
    fn snapshot(&mut self) -> InputSnapshot {
        self.0
    }
}

fn busy_snapshot() -> InputSnapshot {
    InputSnapshot {
        scroll_y: 1.0,
        keys: HeldKeys {
            up: true,
            w: true,
            ..HeldKeys::default()
        },
        cursor: Vec2::new(1200.0, 300.0),
        viewport_size: Vec2::new(1920.0, 1080.0),
        left_button: PointerButton {
            held: true,
            ..PointerButton::default()
        },
        ..InputSnapshot::default()
    }
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");
    let snapshot = busy_snapshot();

    group.bench_function("update_busy", |b| {
        b.iter_batched(
            || (ViewportController::default(), ParameterState::new(Instant::now())),
            |(mut controller, mut params)| {
                black_box(controller.update(&mut params, black_box(&snapshot)));
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("update_idle", |b| {
        let mut controller = ViewportController::default();
        let mut params = ParameterState::new(Instant::now());
        let idle = InputSnapshot::default();
        b.iter(|| black_box(controller.update(&mut params, black_box(&idle))));
    });

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let animator = JuliaAnimator::default();

    c.bench_function("julia_animator_update", |b| {
        let mut t = 0.0_f64;
        b.iter(|| {
            t += 0.016;
            black_box(animator.update(black_box(t), 0.4))
        });
    });
}

fn bench_frame(c: &mut Criterion) {
    let programs = ShaderPrograms {
        julia: ProgramHandle::new(0),
        mandelbrot: ProgramHandle::new(1),
    };
    let start = Instant::now();

    c.bench_function("advance_frame", |b| {
        let mut driver = FrameDriver::new(programs, start);
        let mut input = Repeat(busy_snapshot());
        let mut sink = NullSink;
        let mut now = start;
        b.iter(|| {
            now += Duration::from_millis(16);
            black_box(driver.advance_frame(now, &mut input, &mut sink))
        });
    });
}

criterion_group!(benches, bench_viewport, bench_animation, bench_frame);
criterion_main!(benches);
