//! Source position types shared by AST nodes and tokens.
//!
//! The external parser owns the real node and token objects. These types are
//! the plain-data view of their positions: which file a node or token came
//! from, and where in that file it starts and ends.
//!
//! ## Coordinate Conventions
//!
//! - Lines and columns are **1-indexed** (matching compiler diagnostics)
//! - Offsets are **0-indexed** byte offsets from the start of the file
//! - A location without a file is *synthetic* (built-in or compiler-generated)

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// SourceLocation
// ============================================================================

/// A position in a source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// File the position belongs to; `None` for synthetic nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, bytes).
    pub column: u32,
    /// Byte offset from file start.
    #[serde(default)]
    pub offset: u32,
}

impl SourceLocation {
    /// Create a location inside `file`.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: Some(file.into()),
            line,
            column,
            offset: 0,
        }
    }

    /// Create a location with no associated file.
    pub fn synthetic() -> Self {
        SourceLocation::default()
    }

    /// Set the byte offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// The file name, if any.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Returns true if this location has no associated file.
    pub fn is_synthetic(&self) -> bool {
        self.file.is_none()
    }

    /// Returns true if this location names a file other than `file`.
    ///
    /// Synthetic locations are never foreign.
    pub fn is_foreign_to(&self, file: &str) -> bool {
        matches!(self.file(), Some(own) if own != file)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file() {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "<synthetic>:{}:{}", self.line, self.column),
        }
    }
}

// ============================================================================
// Extent
// ============================================================================

/// The source range covered by a node or token (start inclusive, end exclusive).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Extent {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Extent {
    /// Create an extent from two locations.
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Extent { start, end }
    }

    /// The file the extent starts in.
    pub fn file(&self) -> Option<&str> {
        self.start.file()
    }

    /// Returns true if `location` falls inside this extent.
    ///
    /// Comparison is by offset and requires both to name the same file.
    pub fn contains(&self, location: &SourceLocation) -> bool {
        self.start.file == location.file
            && self.start.offset <= location.offset
            && location.offset < self.end.offset
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.start, self.end.line, self.end.column)
    }
}

// ============================================================================
// Tests
// ============================================================================
