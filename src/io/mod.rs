/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Progress display for headless runs
pub mod progress;
/// Text rendering and terminal redraw
pub mod render;
/// Generation capture and GIF export
pub mod visualization;
