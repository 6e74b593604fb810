// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor signal and trait definitions.

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisitSignal {
    /// Continue traversal into children.
    #[default]
    Descend,

    /// Skip children, continue with siblings.
    Prune,

    /// Stop traversal entirely.
    ///
    /// No further nodes are visited: not the children, not the siblings, and
    /// not the remaining children of any ancestor.
    Abort,
}

impl From<bool> for VisitSignal {
    /// `true` descends, `false` prunes.
    fn from(descend: bool) -> Self {
        if descend {
            VisitSignal::Descend
        } else {
            VisitSignal::Prune
        }
    }
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkOutcome {
    /// Every node the policy and the visitor allowed was visited.
    Completed,
    /// The visitor returned [`VisitSignal::Abort`].
    Aborted,
}

/// A stateful visitor over nodes of type `N`.
///
/// `depth` is the distance from the walk root (the root is at depth 0).
pub trait Visitor<N> {
    fn visit(&mut self, node: &N, depth: usize) -> VisitSignal;
}

impl<N, V: Visitor<N> + ?Sized> Visitor<N> for &mut V {
    fn visit(&mut self, node: &N, depth: usize) -> VisitSignal {
        (**self).visit(node, depth)
    }
}
