//! Error types and error code constants for cxxform.
//!
//! Search misses are not errors: the scanner reports them as `None`. Errors
//! here cover the surrounding plumbing (bad caller input, unreadable
//! translation-unit dumps) and are what the CLI renders as JSON.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (malformed or empty token pattern)
//! - `3`: Resolution errors (dump file missing or unreadable)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output. These double as process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// Input could not be located or loaded.
    ResolutionError = 3,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for cxxform.
#[derive(Debug, Error)]
pub enum CxxformError {
    /// A token pattern could not be parsed or is empty.
    #[error("invalid token pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// A translation-unit dump exists but could not be decoded.
    #[error("failed to load translation unit {path}: {reason}")]
    UnitLoad { path: String, reason: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

impl From<&CxxformError> for OutputErrorCode {
    fn from(err: &CxxformError) -> Self {
        match err {
            CxxformError::InvalidPattern { .. } => OutputErrorCode::InvalidArguments,
            CxxformError::FileNotFound { .. } => OutputErrorCode::ResolutionError,
            CxxformError::UnitLoad { .. } => OutputErrorCode::ResolutionError,
            CxxformError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<CxxformError> for OutputErrorCode {
    fn from(err: CxxformError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl CxxformError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        CxxformError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        CxxformError::FileNotFound { path: path.into() }
    }

    /// Create a unit load error.
    pub fn unit_load(path: impl Into<String>, reason: impl fmt::Display) -> Self {
        CxxformError::UnitLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CxxformError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

/// Result alias used across cxxform.
pub type CxxformResult<T> = Result<T, CxxformError>;

// ============================================================================
// Tests
// ============================================================================
