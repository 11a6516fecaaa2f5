/// Command-line arguments and batch file processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG export of assembled images
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Tile text parsing and rendering
pub mod parser;
/// Batch progress display
pub mod progress;
/// Seeded synthetic puzzle generation
pub mod scramble;
