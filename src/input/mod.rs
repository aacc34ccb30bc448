//! Input adapters that turn platform events into frame driver input.

pub mod gui;
