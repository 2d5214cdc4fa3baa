//! Input/output operations: CLI, configuration, errors, export and navigation

/// Command-line interface and batch rendering
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types for every stage of generation
pub mod error;
/// PNG export of rendered canvases
pub mod image;
/// Next/previous stepping through artwork indices
pub mod navigation;
/// Progress display for batch rendering
pub mod progress;
