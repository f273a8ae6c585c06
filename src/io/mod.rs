//! Input/output module for configuration, progress reporting and image export

/// Command-line interface and run orchestration
pub mod cli;
/// Default parameters and output file names
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// PNG export for scalar fields, band maps and occupancy maps
pub mod image;
/// Progress bar management
pub mod progress;
/// Diffusion capture and animated GIF export
pub mod visualization;
