// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for AST traversal.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order**: a node is visited before its children
//! - Children are visited in the order the parser reports them
//! - Each reachable node is visited at most once per walk
//!
//! # Control Flow
//!
//! - `VisitSignal::Descend` - traverse into children
//! - `VisitSignal::Prune` - skip children, continue with siblings
//! - `VisitSignal::Abort` - halt traversal immediately, nothing else is visited
//!
//! # Entry Points
//!
//! Closures are the common case:
//!
//! ```ignore
//! let mut calls = 0;
//! traverse(root, |node| {
//!     if is_call(node) { calls += 1; }
//!     VisitSignal::Descend
//! }, WalkPolicy::CurrentFile);
//! ```
//!
//! Stateful passes that want the depth of each node implement [`Visitor`]
//! and go through [`walk`]. Fallible visitors use [`try_traverse`], whose
//! error is handed back untouched the moment the visitor returns it.

mod collector;
mod traits;
mod walk;

pub use collector::{PreorderCollector, VisitedNode};
pub use traits::{VisitSignal, Visitor, WalkOutcome};
pub use walk::{traverse, try_traverse, visit_all, visit_current_unit, walk};
