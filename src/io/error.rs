//! Error types for generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid geometry violates the square bordered-field contract
    InvalidGrid {
        /// Number of rows in the offending grid
        rows: usize,
        /// Number of columns in the offending grid
        cols: usize,
        /// Description of the violated constraint
        reason: &'static str,
    },

    /// Origin placement gave up before stamping every requested cell
    ///
    /// Occurs when the attempt budget runs out while the sampler keeps
    /// drawing already-claimed interior cells.
    OriginPlacement {
        /// Number of origins requested
        requested: usize,
        /// Number of origins actually placed
        placed: usize,
        /// Number of draws spent before giving up
        attempts: usize,
    },

    /// Visualization export was requested with no captured frames
    EmptyCapture,

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGrid { rows, cols, reason } => {
                write!(f, "Invalid {rows}x{cols} grid: {reason}")
            }
            Self::OriginPlacement {
                requested,
                placed,
                attempts,
            } => {
                write!(
                    f,
                    "Placed only {placed} of {requested} origins after {attempts} attempts"
                )
            }
            Self::EmptyCapture => {
                write!(f, "No diffusion frames were captured for visualization")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
