pub mod julia_animator;

pub use julia_animator::JuliaAnimator;
