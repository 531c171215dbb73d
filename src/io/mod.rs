//! Input/output operations: CLI, configuration, errors, and artifact
//! export

/// Command-line interface and run driver
pub mod cli;
/// Constants and the run settings surface
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Run orchestration and artifact writing
pub mod export;
/// Manifest serialization
pub mod manifest;
/// Run progress reporting
pub mod progress;
/// Engine tile-rule resource export
pub mod rules;
