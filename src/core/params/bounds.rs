//! Defaults and editing bounds for [`ParameterState`](super::ParameterState).

use std::ops::RangeInclusive;

use crate::core::data::{Complex, Vec2};

pub const DEFAULT_MAX_ITERATIONS: i32 = 200;
pub const DEFAULT_ESCAPE_RADIUS: f32 = 100.0;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.8, 0.156);
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;
pub const DEFAULT_TRANSLATION: Vec2 = Vec2::ZERO;
pub const DEFAULT_SPEED_FACTOR: f32 = 0.4;

pub const MAX_ITERATIONS_RANGE: RangeInclusive<i32> = 1..=1000;
pub const ESCAPE_RADIUS_RANGE: RangeInclusive<f32> = 50.0..=200.0;
pub const JULIA_COMPONENT_RANGE: RangeInclusive<f32> = -2.0..=2.0;
pub const SPEED_FACTOR_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Zoom never drops below this, whatever input arrives.
pub const MIN_ZOOM_FACTOR: f32 = 0.1;
