use crate::core::data::Complex;
use crate::core::params::bounds::DEFAULT_JULIA_CONSTANT;

/// Derives the Julia constant from elapsed time.
///
/// The constant orbits `base` along a sum of slow sinusoids:
///
/// ```text
/// t    = elapsed * speed
/// real = base.real + 0.30 cos(0.31 t) - 0.15 sin(1.17 t)
/// imag = base.imag + 0.30 sin(0.37 t) + 0.15 cos(2.31 t)
/// ```
///
/// Holds no state beyond `base`, so equal inputs always give equal outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAnimator {
    base: Complex,
}

impl Default for JuliaAnimator {
    fn default() -> Self {
        Self {
            base: DEFAULT_JULIA_CONSTANT,
        }
    }
}

impl JuliaAnimator {
    #[must_use]
    pub const fn with_base(base: Complex) -> Self {
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> Complex {
        self.base
    }

    /// Returns `None` when `speed_factor <= 0`: the constant stays under user control.
    #[must_use]
    pub fn update(&self, elapsed_seconds: f64, speed_factor: f32) -> Option<Complex> {
        if speed_factor <= 0.0 || speed_factor.is_nan() {
            return None;
        }

        let t = elapsed_seconds as f32 * speed_factor;

        Some(Complex {
            real: self.base.real + 0.30 * (0.31 * t).cos() - 0.15 * (1.17 * t).sin(),
            imag: self.base.imag + 0.30 * (0.37 * t).sin() + 0.15 * (2.31 * t).cos(),
        })
    }
}
