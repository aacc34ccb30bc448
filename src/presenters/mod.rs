//! Presenters that put rendered frames on screen.

pub mod wgpu;
