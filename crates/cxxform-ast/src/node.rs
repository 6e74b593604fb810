// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The [`AstNode`] trait.
//!
//! Node handles are read-only views owned by the parser's translation unit,
//! which must outlive any walk over them. The walker never stores a handle
//! past the end of the walk that produced it.

use cxxform_core::types::{Extent, SourceLocation};

/// A read-only handle to one AST node.
///
/// Handles are typically cheap to copy (a cursor, or a reference into an
/// owned tree). `children` returns the direct children in source order.
pub trait AstNode: Sized {
    /// The node's own location (where the parser says it "is").
    fn location(&self) -> SourceLocation;

    /// The source range the node covers.
    fn extent(&self) -> Extent;

    /// Direct children, in original order.
    fn children(&self) -> Vec<Self>;

    /// The file a file-scoped walk rooted here is restricted to.
    ///
    /// This is the file where the node's extent starts, falling back to the
    /// node's location for parsers that report an empty extent.
    fn origin_file(&self) -> Option<String> {
        let extent = self.extent();
        extent
            .start
            .file
            .or_else(|| self.location().file)
    }

    /// Returns true if the node's location names a file other than `file`.
    ///
    /// Nodes without a file (synthetic nodes) are never foreign.
    fn is_foreign_to(&self, file: &str) -> bool {
        self.location().is_foreign_to(file)
    }
}
