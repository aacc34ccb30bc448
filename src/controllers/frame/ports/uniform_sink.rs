use crate::controllers::frame::ports::shader_compiler::ProgramHandle;

pub const JULIA_CONSTANT: &str = "juliaConstant";
pub const MAX_ITERATIONS: &str = "maxIterations";
pub const ESCAPE_RADIUS: &str = "escapeRadius";
pub const ZOOM_FACTOR: &str = "zoomFactor";
pub const TRANSLATION: &str = "translation";

/// Names pushed every frame, in push order.
pub const FRAME_UNIFORMS: [&str; 5] = [
    JULIA_CONSTANT,
    MAX_ITERATIONS,
    ESCAPE_RADIUS,
    ZOOM_FACTOR,
    TRANSLATION,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Vec2([f32; 2]),
    Int(i32),
    Float(f32),
}

/// GPU side of a frame: named uniform writes followed by one quad draw.
///
/// Names unknown to a program are ignored, the way a missing uniform
/// location is.
pub trait UniformSink {
    fn set_uniform(&mut self, program: ProgramHandle, name: &str, value: UniformValue);
    fn draw_fullscreen_quad(&mut self, program: ProgramHandle);
}
