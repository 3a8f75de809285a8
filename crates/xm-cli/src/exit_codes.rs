//! Exit codes for the xcodemod CLI.
//!
//! Exit codes communicate outcome without requiring output parsing.
//!
//! Exit code ranges:
//! - 0-9: Operational outcomes (parse outcome from code, not output)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors

use xm_descriptor::DescriptorError;

/// Exit codes for xcodemod operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All descriptors loaded cleanly
    Clean = 0,

    /// At least one descriptor failed to parse (bad JSON or wrong shape)
    Invalid = 1,

    /// At least one descriptor file was missing
    NotFound = 10,

    /// Reading a descriptor file failed
    IoError = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates an error requiring attention.
    pub fn is_error(self) -> bool {
        self != ExitCode::Clean
    }

    /// Keep the more severe of two outcomes (highest code wins).
    pub fn worst(self, other: ExitCode) -> ExitCode {
        if (other as i32) > (self as i32) {
            other
        } else {
            self
        }
    }

    /// Exit code for a failed descriptor load.
    pub fn from_error(err: &DescriptorError) -> ExitCode {
        match err {
            DescriptorError::NotFound { .. } => ExitCode::NotFound,
            DescriptorError::Io(_) => ExitCode::IoError,
            DescriptorError::Decode(_)
            | DescriptorError::RootNotObject { .. }
            | DescriptorError::FieldType { .. } => ExitCode::Invalid,
        }
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::Invalid => "ERR_INVALID",
            ExitCode::NotFound => "ERR_NOT_FOUND",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
