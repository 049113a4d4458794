//! Input/output surfaces and ambient concerns

/// Command-line arguments and view orchestration
pub mod cli;
/// Constants, bounds and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress bars for a running simulation
pub mod progress;
/// Text and JSON rendering
pub mod render;
