//! Input/output, configuration and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Image loading, pixel packing and PNG export
pub mod image;
/// Terminal logger setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
