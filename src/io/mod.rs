//! Input/output, configuration and error reporting

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// Seeded random matrix generation
pub mod generator;
/// Text matrix parsing
pub mod parser;
/// Progress bars for batch runs
pub mod progress;
/// Diagnostic text rendering
pub mod render;
