#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Julia,
    Mandelbrot,
}

impl RenderMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set Fractal",
        }
    }

    /// Whether the Julia constant and animation speed apply in this mode.
    #[must_use]
    pub const fn uses_julia_constant(self) -> bool {
        matches!(self, Self::Julia)
    }
}
