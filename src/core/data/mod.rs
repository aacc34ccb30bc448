pub mod complex;
pub mod vec2;

pub use complex::Complex;
pub use vec2::Vec2;
