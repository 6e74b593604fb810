// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor-driven traversal over C/C++ abstract syntax trees.
//!
//! The AST itself belongs to an external parser. This crate only needs a
//! handle type that can report its location, its extent, and its children;
//! that contract is the [`AstNode`] trait. Anything implementing it can be
//! walked with [`traverse`] and friends.
//!
//! # Overview
//!
//! - **Control**: a visitor returns a [`VisitSignal`] per node: descend into
//!   the children, prune them, or abort the whole walk.
//! - **Policies**: [`WalkPolicy::Unrestricted`] reaches every node;
//!   [`WalkPolicy::CurrentFile`] skips nodes (and their subtrees) that come
//!   from a file other than the root's, such as included headers.
//! - **Owned trees**: [`Node`] is a serializable tree for AST dumps produced
//!   by an exporter, and implements [`AstNode`] through `&Node`.
//!
//! # Quick Start
//!
//! ```
//! use cxxform_ast::{traverse, Node, VisitSignal, WalkPolicy};
//! use cxxform_core::types::SourceLocation;
//!
//! let root = Node::new("TRANSLATION_UNIT", SourceLocation::new("main.cpp", 1, 1))
//!     .with_child(Node::new("FUNCTION_DECL", SourceLocation::new("main.cpp", 3, 1)))
//!     .with_child(Node::new("STRUCT_DECL", SourceLocation::new("vector.hpp", 9, 1)));
//!
//! let mut kinds = Vec::new();
//! traverse(
//!     &root,
//!     |node: &&Node| {
//!         kinds.push(node.kind.clone());
//!         VisitSignal::Descend
//!     },
//!     WalkPolicy::CurrentFile,
//! );
//! assert_eq!(kinds, ["TRANSLATION_UNIT", "FUNCTION_DECL"]);
//! ```

/// The handle contract between the walker and the external parser.
pub mod node;
pub use node::AstNode;

/// Owned, serializable AST tree.
pub mod tree;
pub use tree::Node;

/// Visitor signals and the traversal engine.
pub mod visitor;
pub use visitor::{
    traverse, try_traverse, visit_all, visit_current_unit, walk, PreorderCollector, VisitSignal,
    VisitedNode, Visitor, WalkOutcome,
};

pub use cxxform_core::config::{WalkOptions, WalkPolicy};
