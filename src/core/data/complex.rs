// f32 throughout: every value here ends up in a shader uniform
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn clamp_components(self, min: f32, max: f32) -> Self {
        Self {
            real: self.real.clamp(min, max),
            imag: self.imag.clamp(min, max),
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 2] {
        [self.real, self.imag]
    }
}
