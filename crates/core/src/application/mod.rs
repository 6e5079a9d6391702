// Application Layer - Command handlers

pub mod constants;
pub mod controller;

// Re-exports
pub use controller::{validate_input, VisualizerController};
