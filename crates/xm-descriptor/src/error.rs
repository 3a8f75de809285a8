//! Error types for descriptor loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a modification descriptor.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Descriptor file does not exist
    #[error("descriptor file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// I/O error reading the descriptor file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntactically invalid JSON
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("descriptor root must be an object, found {found}")]
    RootNotObject { found: &'static str },

    /// A field holds a value of the wrong JSON type
    #[error("field '{field}' must be {expected}, found {found}")]
    FieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl DescriptorError {
    /// Whether the error describes a wrong JSON shape (as opposed to a
    /// missing file, a read failure, or malformed JSON syntax).
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            DescriptorError::RootNotObject { .. } | DescriptorError::FieldType { .. }
        )
    }
}

/// Result type alias for descriptor operations.
pub type Result<T> = std::result::Result<T, DescriptorError>;
