//! Headless domain: parameter state, Julia animation and the viewport transform.

pub mod animation;
pub mod data;
pub mod params;
pub mod viewport;
