// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The traversal engine.
//!
//! All entry points share [`drive`], which walks with an explicit work stack
//! instead of recursion so that pathologically deep trees (nested templates,
//! macro expansions) cannot exhaust the call stack. Children are pushed in
//! reverse, so pops reproduce recursive pre-order exactly.
//!
//! Under [`WalkPolicy::CurrentFile`] a node whose location names another file
//! is dropped when it is popped: the visitor is not called for it and its
//! children are never pushed. The root is never filtered, and nodes without
//! a file are always visited.

use std::convert::Infallible;

use tracing::{debug, trace};

use cxxform_core::config::{WalkOptions, WalkPolicy};

use super::traits::{VisitSignal, Visitor, WalkOutcome};
use crate::node::AstNode;

/// Walk `root` in pre-order, calling `visitor` for every node the policy
/// admits.
///
/// `options` accepts a [`WalkPolicy`], full [`WalkOptions`], or a `bool`
/// (`true` = scoped to the root's file).
pub fn traverse<N, F>(root: N, mut visitor: F, options: impl Into<WalkOptions>) -> WalkOutcome
where
    N: AstNode,
    F: FnMut(&N) -> VisitSignal,
{
    let options = options.into();
    infallible(drive(root, &options, |node: &N, _| {
        Ok::<_, Infallible>(visitor(node))
    }))
}

/// Like [`traverse`], for visitors that can fail.
///
/// The first `Err` returned by the visitor ends the walk; it is returned as
/// is, and no further nodes are visited.
pub fn try_traverse<N, F, E>(
    root: N,
    mut visitor: F,
    options: impl Into<WalkOptions>,
) -> Result<WalkOutcome, E>
where
    N: AstNode,
    F: FnMut(&N) -> Result<VisitSignal, E>,
{
    let options = options.into();
    drive(root, &options, |node: &N, _| visitor(node))
}

/// Walk every reachable node, including nodes from included files.
pub fn visit_all<N, F>(root: N, visitor: F) -> WalkOutcome
where
    N: AstNode,
    F: FnMut(&N) -> VisitSignal,
{
    traverse(root, visitor, WalkPolicy::Unrestricted)
}

/// Walk only the nodes that belong to the root's own file.
pub fn visit_current_unit<N, F>(root: N, visitor: F) -> WalkOutcome
where
    N: AstNode,
    F: FnMut(&N) -> VisitSignal,
{
    traverse(root, visitor, WalkPolicy::CurrentFile)
}

/// Walk `root` with a stateful [`Visitor`].
pub fn walk<N, V>(root: N, visitor: &mut V, options: &WalkOptions) -> WalkOutcome
where
    N: AstNode,
    V: Visitor<N> + ?Sized,
{
    infallible(drive(root, options, |node: &N, depth| {
        Ok::<_, Infallible>(visitor.visit(node, depth))
    }))
}

fn infallible(result: Result<WalkOutcome, Infallible>) -> WalkOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// The one walk routine behind every entry point.
fn drive<N, F, E>(root: N, options: &WalkOptions, mut visit: F) -> Result<WalkOutcome, E>
where
    N: AstNode,
    F: FnMut(&N, usize) -> Result<VisitSignal, E>,
{
    let scope = if options.policy.is_scoped() {
        let file = options.scope_file.clone().or_else(|| root.origin_file());
        if file.is_none() {
            debug!("walk root has no file; scoped walk visits every node");
        }
        file
    } else {
        None
    };

    let mut visited = 0usize;
    let mut filtered = 0usize;
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if let Some(file) = scope.as_deref() {
            if depth > 0 && node.is_foreign_to(file) {
                filtered += 1;
                trace!(depth, location = %node.location(), scope = file, "skipping foreign node");
                continue;
            }
        }

        visited += 1;
        match visit(&node, depth)? {
            VisitSignal::Descend => {
                let children = node.children();
                stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
            }
            VisitSignal::Prune => {}
            VisitSignal::Abort => {
                debug!(visited, filtered, "walk aborted by visitor");
                return Ok(WalkOutcome::Aborted);
            }
        }
    }

    trace!(visited, filtered, "walk completed");
    Ok(WalkOutcome::Completed)
}

// ============================================================================
// Tests
// ============================================================================
