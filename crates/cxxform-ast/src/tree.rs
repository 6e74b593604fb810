// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Owned AST nodes.
//!
//! [`Node`] mirrors what a C/C++ parser reports for a cursor: a kind, an
//! optional spelling, a location, an extent and the children. Exporters
//! serialize whole translation units in this shape; tests build trees with
//! the `with_*` builders.

use serde::{Deserialize, Serialize};

use cxxform_core::types::{Extent, SourceLocation};

use crate::node::AstNode;

/// An owned AST node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node kind as reported by the parser (e.g. `FUNCTION_DECL`).
    pub kind: String,
    /// Name or spelling, for nodes that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
    /// Where the node is.
    #[serde(default)]
    pub location: SourceLocation,
    /// What the node covers.
    #[serde(default)]
    pub extent: Extent,
    /// Children in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node whose extent is the single point `location`.
    pub fn new(kind: impl Into<String>, location: SourceLocation) -> Self {
        Node {
            kind: kind.into(),
            spelling: None,
            extent: Extent::new(location.clone(), location.clone()),
            location,
            children: Vec::new(),
        }
    }

    pub fn with_spelling(mut self, spelling: impl Into<String>) -> Self {
        self.spelling = Some(spelling.into());
        self
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// `kind` and `spelling` joined for display (`FUNCTION_DECL main`).
    pub fn label(&self) -> String {
        match &self.spelling {
            Some(spelling) => format!("{} {}", self.kind, spelling),
            None => self.kind.clone(),
        }
    }
}

impl AstNode for &Node {
    fn location(&self) -> SourceLocation {
        self.location.clone()
    }

    fn extent(&self) -> Extent {
        self.extent.clone()
    }

    fn children(&self) -> Vec<Self> {
        let node = *self;
        node.children.iter().collect()
    }

    fn origin_file(&self) -> Option<String> {
        self.extent
            .file()
            .or_else(|| self.location.file())
            .map(str::to_string)
    }

    fn is_foreign_to(&self, file: &str) -> bool {
        self.location.is_foreign_to(file)
    }
}
