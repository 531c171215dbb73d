//! Error types for tile-set synthesis runs
//!
//! Failures are reported per run: either all 16 tiles, the sheet, and the
//! metadata files are produced, or the run fails as a whole. Missing
//! source textures are deliberately not an error; they degrade to
//! transparent sampling in the sampler instead.

use std::fmt;
use std::path::PathBuf;

/// Main error type for synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// A recipe's boundary geometry collapsed to fewer than two distinct
    /// points
    ///
    /// This is a precondition failure in the static recipe table, not a
    /// user-recoverable condition.
    DegenerateRecipe {
        /// Neighbor code of the defective recipe
        code: u8,
        /// Description of the geometric defect
        reason: &'static str,
    },

    /// Run settings validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a generated raster
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

    /// Failed to serialize the run manifest
    ManifestEncode {
        /// Underlying JSON serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRecipe { code, reason } => {
                write!(f, "Degenerate recipe for code {code}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::ManifestEncode { source } => {
                write!(f, "Failed to encode manifest: {source}")
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ManifestEncode { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl From<serde_json::Error> for SynthesisError {
    fn from(err: serde_json::Error) -> Self {
        Self::ManifestEncode { source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_parameter() {
        let err = invalid_parameter("tile_size", &0, &"must be at least 2");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'tile_size' = '0': must be at least 2"
        );
    }
}
