//! Error types for the mattertable library
//!
//! Core rendering never surfaces these to its callers: every front matter
//! failure degrades to returning the input unchanged. The error values exist
//! so that each boundary (decode, parse, layout selection) reports *why* it
//! fell back, and so that file I/O in the CLI can fail loudly.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MatterTableError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input is not valid UTF-8 text
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// The first line of the document is not the front matter delimiter
    #[error("No front matter found")]
    NoFrontMatter,

    /// Front matter is present but is neither a mapping nor a single pair
    #[error("Invalid front matter: {reason}")]
    InvalidFrontMatter { reason: String },

    /// Layout selector outside the known set
    #[error("Unknown layout: {layout:?} (expected \"horizontal\" or \"vertical\")")]
    UnknownLayout { layout: String },

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MatterTableError>;

impl MatterTableError {
    /// Create a new invalid front matter error
    pub fn invalid_front_matter(reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            reason: reason.into(),
        }
    }

    /// Create a new unknown layout error
    pub fn unknown_layout(layout: impl Into<String>) -> Self {
        Self::UnknownLayout {
            layout: layout.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error means "hand the input back untouched".
    ///
    /// These are the outcomes the rendering entry points swallow; anything
    /// else comes from the I/O layer.
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            Self::NoFrontMatter
                | Self::InvalidEncoding(_)
                | Self::InvalidFrontMatter { .. }
                | Self::UnknownLayout { .. }
                | Self::Yaml(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MatterTableError::file_not_found("test.md");
        assert!(matches!(err, MatterTableError::FileNotFound { .. }));
        assert!(!err.is_passthrough());
    }

    #[test]
    fn test_passthrough_kinds() {
        assert!(MatterTableError::NoFrontMatter.is_passthrough());
        assert!(MatterTableError::invalid_front_matter("bad").is_passthrough());
        assert!(MatterTableError::unknown_layout("diagonal").is_passthrough());
        assert!(!MatterTableError::validation("too big").is_passthrough());
    }

    #[test]
    fn test_unknown_layout_message() {
        let err = MatterTableError::unknown_layout("");
        assert_eq!(
            err.to_string(),
            "Unknown layout: \"\" (expected \"horizontal\" or \"vertical\")"
        );
    }
}
