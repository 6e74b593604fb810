// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! PreorderCollector visitor.
//!
//! Records every visited node together with its depth, in visitation order.
//! An optional limit turns the collector into a "first N nodes" sampler: once
//! the limit is reached it aborts the walk.
//!
//! # Usage
//!
//! ```ignore
//! use cxxform_ast::{walk, Node, PreorderCollector, WalkOptions};
//!
//! let mut collector = PreorderCollector::<&Node>::new()
//!     .with_descend_filter(|n| n.kind != "UNEXPOSED_EXPR");
//! walk(&root, &mut collector, &WalkOptions::current_file());
//! for entry in collector.nodes() {
//!     println!("{:indent$}{}", "", entry.node.label(), indent = entry.depth * 2);
//! }
//! ```

use cxxform_core::output::VisitedNodeInfo;

use super::traits::{VisitSignal, Visitor};
use crate::tree::Node;

/// A node recorded by [`PreorderCollector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedNode<N> {
    /// Distance from the walk root.
    pub depth: usize,
    /// The node handle.
    pub node: N,
}

impl VisitedNode<&Node> {
    /// Output form of an owned-tree entry.
    pub fn info(&self) -> VisitedNodeInfo {
        VisitedNodeInfo {
            depth: self.depth,
            kind: self.node.kind.clone(),
            spelling: self.node.spelling.clone(),
            location: self.node.location.clone(),
        }
    }
}

type Filter<N> = Box<dyn Fn(&N) -> bool>;

/// Collects visited nodes in pre-order.
pub struct PreorderCollector<N> {
    nodes: Vec<VisitedNode<N>>,
    limit: Option<usize>,
    descend_into: Option<Filter<N>>,
}

impl<N> Default for PreorderCollector<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> PreorderCollector<N> {
    pub fn new() -> Self {
        PreorderCollector {
            nodes: Vec::new(),
            limit: None,
            descend_into: None,
        }
    }

    /// Abort the walk once `limit` nodes have been recorded.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only descend into nodes for which `filter` returns true. Nodes that
    /// fail the filter are still recorded; their children are pruned.
    pub fn with_descend_filter(mut self, filter: impl Fn(&N) -> bool + 'static) -> Self {
        self.descend_into = Some(Box::new(filter));
        self
    }

    /// Recorded nodes, in visitation order.
    pub fn nodes(&self) -> &[VisitedNode<N>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<VisitedNode<N>> {
        self.nodes
    }
}

impl<N: Clone> Visitor<N> for PreorderCollector<N> {
    fn visit(&mut self, node: &N, depth: usize) -> VisitSignal {
        if self.limit.is_some_and(|limit| self.nodes.len() >= limit) {
            return VisitSignal::Abort;
        }
        self.nodes.push(VisitedNode {
            depth,
            node: node.clone(),
        });
        match &self.descend_into {
            Some(filter) => VisitSignal::from(filter(node)),
            None => VisitSignal::Descend,
        }
    }
}
