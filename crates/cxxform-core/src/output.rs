//! JSON output types and serialization for CLI responses.
//!
//! ## Design Principles
//!
//! 1. **Status first:** Every response has `status` as first field
//! 2. **Deterministic:** Same input -> same output (field order, array ordering)
//! 3. **Nullable vs absent:** Explicit `null` for "no value" (e.g. a search miss)
//! 4. **Versioned:** Schema version in response enables forward compatibility

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::config::WalkPolicy;
use crate::error::{CxxformError, OutputErrorCode};
use crate::types::SourceLocation;

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Walk output
// ============================================================================

/// One visited node, in visitation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitedNodeInfo {
    /// Depth below the walk root (root is 0).
    pub depth: usize,
    /// Node kind as reported by the parser (e.g. `FUNCTION_DECL`).
    pub kind: String,
    /// Node spelling, when the node has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
    /// Node location.
    pub location: SourceLocation,
}

/// Response for the `walk` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Translation unit file.
    pub file: String,
    /// Policy the walk ran under.
    pub policy: WalkPolicy,
    /// Visited nodes in pre-order.
    pub nodes: Vec<VisitedNodeInfo>,
}

impl WalkResponse {
    pub fn new(file: impl Into<String>, policy: WalkPolicy, nodes: Vec<VisitedNodeInfo>) -> Self {
        WalkResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            file: file.into(),
            policy,
            nodes,
        }
    }
}

// ============================================================================
// Find output
// ============================================================================

/// Response for the `find` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Pattern in its textual form.
    pub pattern: String,
    /// Index the search started from.
    pub start: usize,
    /// Index of the first match; `null` when not found.
    pub index: Option<usize>,
    /// Location of the first matched token, when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    /// Innermost AST node whose extent covers the matched token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<String>,
}

impl FindResponse {
    pub fn new(pattern: impl Into<String>, start: usize, index: Option<usize>) -> Self {
        FindResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            pattern: pattern.into(),
            start,
            index,
            location: None,
            enclosing: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_enclosing(mut self, label: impl Into<String>) -> Self {
        self.enclosing = Some(label.into());
        self
    }
}

// ============================================================================
// Error output
// ============================================================================

/// Error details for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
}

impl ErrorInfo {
    /// Create from a CxxformError.
    pub fn from_error(err: &CxxformError) -> Self {
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
        }
    }
}

/// Error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Error details.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    pub fn from_error(err: &CxxformError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

// ============================================================================
// Emitters
// ============================================================================

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

/// Emit a response as compact JSON (single line) to a writer.
pub fn emit_response_compact<T: Serialize>(
    response: &T,
    writer: &mut impl Write,
) -> io::Result<()> {
    let json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

// ============================================================================
// Tests
// ============================================================================
