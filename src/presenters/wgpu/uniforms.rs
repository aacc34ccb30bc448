use crate::controllers::frame::ports::uniform_sink::{
    ESCAPE_RADIUS, JULIA_CONSTANT, MAX_ITERATIONS, TRANSLATION, ZOOM_FACTOR,
};
use crate::controllers::frame::ports::UniformValue;

/// Host mirror of the `FractalUniforms` block both fragment shaders declare.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FractalUniforms {
    pub julia_constant: [f32; 2],
    pub translation: [f32; 2],
    pub max_iterations: i32,
    pub escape_radius: f32,
    pub zoom_factor: f32,
    _padding: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Applied,
    UnknownName,
    TypeMismatch,
}

impl FractalUniforms {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Writes `value` into the field the shader knows as `name`.
    pub fn assign(&mut self, name: &str, value: UniformValue) -> Assignment {
        match (name, value) {
            (JULIA_CONSTANT, UniformValue::Vec2(v)) => self.julia_constant = v,
            (TRANSLATION, UniformValue::Vec2(v)) => self.translation = v,
            (MAX_ITERATIONS, UniformValue::Int(v)) => self.max_iterations = v,
            (ESCAPE_RADIUS, UniformValue::Float(v)) => self.escape_radius = v,
            (ZOOM_FACTOR, UniformValue::Float(v)) => self.zoom_factor = v,
            (JULIA_CONSTANT | TRANSLATION | MAX_ITERATIONS | ESCAPE_RADIUS | ZOOM_FACTOR, _) => {
                return Assignment::TypeMismatch;
            }
            _ => return Assignment::UnknownName,
        }

        Assignment::Applied
    }
}
