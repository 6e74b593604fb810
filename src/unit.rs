//! Serialized translation units.
//!
//! cxxform never runs the C/C++ parser itself. An exporter that does (for
//! example a small libclang driver) writes each translation unit as JSON:
//!
//! ```json
//! {
//!   "file": "src/task_group.cpp",
//!   "root": { "kind": "TRANSLATION_UNIT", "location": { ... }, "children": [ ... ] },
//!   "tokens": [ { "kind": "keyword", "spelling": "namespace", "location": { ... } } ]
//! }
//! ```
//!
//! `tokens` may be omitted. Dumps nested deeper than serde_json's recursion
//! limit (128 levels) are rejected with [`CxxformError::UnitLoad`].

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use cxxform_ast::{
    traverse, walk, Node, PreorderCollector, VisitSignal, WalkOptions, WalkPolicy,
};
use cxxform_core::error::{CxxformError, CxxformResult};
use cxxform_core::output::VisitedNodeInfo;
use cxxform_core::types::SourceLocation;
use cxxform_tokens::{Token, TokenPattern};

/// One parsed translation unit: its AST and its token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// Main file of the unit.
    pub file: String,
    /// AST root.
    pub root: Node,
    /// Lexical tokens, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,
}

impl TranslationUnit {
    /// Decode a unit from JSON text. `origin` names the source in errors.
    pub fn from_json(text: &str, origin: &str) -> CxxformResult<Self> {
        serde_json::from_str(text).map_err(|e| CxxformError::unit_load(origin, e))
    }

    /// Read and decode a unit dump from disk.
    pub fn from_path(path: impl AsRef<Path>) -> CxxformResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CxxformError::file_not_found(&origin),
            _ => CxxformError::unit_load(&origin, e),
        })?;
        let unit = Self::from_json(&text, &origin)?;
        debug!(
            path = %origin,
            file = %unit.file,
            nodes = unit.root.node_count(),
            tokens = unit.tokens.len(),
            "loaded translation unit"
        );
        Ok(unit)
    }

    /// Visit the AST in pre-order and report every visited node.
    pub fn preorder(&self, options: &WalkOptions) -> Vec<VisitedNodeInfo> {
        self.collect(PreorderCollector::new(), options)
    }

    /// Like [`preorder`](Self::preorder), stopping after `limit` nodes.
    pub fn preorder_prefix(&self, options: &WalkOptions, limit: usize) -> Vec<VisitedNodeInfo> {
        self.collect(PreorderCollector::new().with_limit(limit), options)
    }

    fn collect<'a>(
        &'a self,
        mut collector: PreorderCollector<&'a Node>,
        options: &WalkOptions,
    ) -> Vec<VisitedNodeInfo> {
        walk(&self.root, &mut collector, options);
        collector.into_nodes().iter().map(|entry| entry.info()).collect()
    }

    /// The innermost node whose extent covers `location`.
    ///
    /// Subtrees that do not cover the location are pruned. The root is always
    /// entered, since exporters often leave its extent empty.
    pub fn enclosing_node(&self, location: &SourceLocation) -> Option<&Node> {
        let mut innermost = None;
        traverse(
            &self.root,
            |node| {
                if node.extent.contains(location) {
                    innermost = Some(*node);
                    VisitSignal::Descend
                } else {
                    VisitSignal::from(std::ptr::eq(*node, &self.root))
                }
            },
            WalkPolicy::Unrestricted,
        );
        innermost
    }

    /// First index at or after `start` where `pattern` matches the tokens.
    pub fn find(&self, pattern: &TokenPattern, start: usize) -> Option<usize> {
        pattern.find_in(&self.tokens, start)
    }
}
