// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Property tests for the traversal engine.
//!
//! Generated trees mix nodes from the main file, from included headers, and
//! synthetic nodes with no file. Walks over a second node representation
//! (arena indices) confirm that the engine only relies on the `AstNode`
//! contract.

use proptest::prelude::*;
use rayon::prelude::*;

use cxxform_ast::{
    traverse, try_traverse, visit_all, visit_current_unit, walk, AstNode, Node,
    PreorderCollector, VisitSignal, WalkOptions, WalkOutcome, WalkPolicy,
};
use cxxform_core::types::{Extent, SourceLocation};

// =============================================================================
// Strategies
// =============================================================================

const MAIN: &str = "main.cpp";
const HEADERS: [&str; 2] = ["task.hpp", "queue.hpp"];

fn location() -> impl Strategy<Value = SourceLocation> {
    prop_oneof![
        5 => (2u32..400).prop_map(|line| SourceLocation::new(MAIN, line, 1)),
        2 => prop::sample::select(HEADERS.to_vec())
            .prop_map(|file| SourceLocation::new(file, 1, 1)),
        1 => Just(SourceLocation::synthetic()),
    ]
}

fn subtree() -> impl Strategy<Value = Node> {
    let leaf = location().prop_map(|location| Node::new("LEAF", location));
    leaf.prop_recursive(6, 96, 4, |inner| {
        (location(), prop::collection::vec(inner, 0..4))
            .prop_map(|(location, children)| Node::new("NODE", location).with_children(children))
    })
}

/// A unit rooted in the main file. Node kinds are rewritten to their
/// pre-order index (`n0`, `n1`, ...) so every node is identifiable.
fn unit_tree() -> impl Strategy<Value = Node> {
    prop::collection::vec(subtree(), 0..5).prop_map(|children| {
        let mut root =
            Node::new("TRANSLATION_UNIT", SourceLocation::new(MAIN, 1, 1)).with_children(children);
        number_in_preorder(&mut root);
        root
    })
}

fn number_in_preorder(root: &mut Node) {
    let mut next = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        node.kind = format!("n{}", next);
        next += 1;
        stack.extend(node.children.iter_mut().rev());
    }
}

// =============================================================================
// Reference walks
// =============================================================================

/// Recursive pre-order.
fn preorder<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    out.push(node);
    for child in &node.children {
        preorder(child, out);
    }
}

/// Recursive pre-order that drops foreign nodes together with their subtrees.
fn scoped_preorder<'a>(node: &'a Node, is_root: bool, out: &mut Vec<&'a Node>) {
    if !is_root && node.location.is_foreign_to(MAIN) {
        return;
    }
    out.push(node);
    for child in &node.children {
        scoped_preorder(child, false, out);
    }
}

fn all_nodes(root: &Node) -> Vec<&Node> {
    let mut out = Vec::new();
    preorder(root, &mut out);
    out
}

fn scoped_nodes(root: &Node) -> Vec<&Node> {
    let mut out = Vec::new();
    scoped_preorder(root, true, &mut out);
    out
}

fn kinds<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Vec<String> {
    nodes.into_iter().map(|n| n.kind.clone()).collect()
}

fn descendants(node: &Node) -> Vec<String> {
    let mut all = Vec::new();
    for child in &node.children {
        preorder(child, &mut all);
    }
    kinds(all)
}

fn walk_kinds(
    root: &Node,
    policy: WalkPolicy,
    signal: impl Fn(&Node) -> VisitSignal,
) -> (Vec<String>, WalkOutcome) {
    let mut seen = Vec::new();
    let outcome = traverse(
        root,
        |n: &&Node| {
            seen.push(n.kind.clone());
            signal(*n)
        },
        policy,
    );
    (seen, outcome)
}

fn without(kinds: Vec<String>, hidden: &[String]) -> Vec<String> {
    kinds.into_iter().filter(|k| !hidden.contains(k)).collect()
}

// =============================================================================
// Unrestricted walks
// =============================================================================

proptest! {
    #[test]
    fn descend_everywhere_visits_each_node_once_in_preorder(tree in unit_tree()) {
        let (seen, outcome) =
            walk_kinds(&tree, WalkPolicy::Unrestricted, |_| VisitSignal::Descend);
        prop_assert_eq!(outcome, WalkOutcome::Completed);
        prop_assert_eq!(seen.len(), tree.node_count());
        prop_assert_eq!(seen, kinds(all_nodes(&tree)));
    }

    #[test]
    fn prune_hides_descendants_only(tree in unit_tree(), pick in any::<prop::sample::Index>()) {
        let all = all_nodes(&tree);
        let target = all[pick.index(all.len())];
        let hidden = descendants(target);

        let (seen, _) = walk_kinds(&tree, WalkPolicy::Unrestricted, |n| {
            VisitSignal::from(n.kind != target.kind)
        });

        prop_assert!(seen.contains(&target.kind));
        prop_assert_eq!(seen, without(kinds(all), &hidden));
    }

    #[test]
    fn abort_visits_exactly_the_preorder_prefix(
        tree in unit_tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let all = all_nodes(&tree);
        let stop_at = pick.index(all.len());
        let stop_kind = all[stop_at].kind.clone();

        let mut seen = Vec::new();
        let outcome = visit_all(&tree, |n: &&Node| {
            seen.push(n.kind.clone());
            if n.kind == stop_kind {
                VisitSignal::Abort
            } else {
                VisitSignal::Descend
            }
        });

        prop_assert_eq!(outcome, WalkOutcome::Aborted);
        prop_assert_eq!(seen, kinds(all[..=stop_at].iter().copied()));
    }

    #[test]
    fn repeated_walks_are_identical(tree in unit_tree(), scoped in any::<bool>()) {
        let policy = WalkPolicy::from(scoped);
        let signal = |n: &Node| VisitSignal::from(n.kind.len() % 2 == 0);
        prop_assert_eq!(walk_kinds(&tree, policy, signal), walk_kinds(&tree, policy, signal));
    }

    #[test]
    fn visitor_error_is_returned_unchanged(
        tree in unit_tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let all = all_nodes(&tree);
        let fail_at = pick.index(all.len());
        let mut calls = 0;
        let result: Result<WalkOutcome, String> = try_traverse(
            &tree,
            |n: &&Node| {
                calls += 1;
                if calls == fail_at + 1 {
                    Err(format!("cannot rewrite {}", n.kind))
                } else {
                    Ok(VisitSignal::Descend)
                }
            },
            WalkOptions::unrestricted(),
        );
        prop_assert_eq!(result, Err(format!("cannot rewrite {}", all[fail_at].kind)));
        prop_assert_eq!(calls, fail_at + 1);
    }
}

// =============================================================================
// File-scoped walks
// =============================================================================

proptest! {
    #[test]
    fn scoped_walk_never_reaches_foreign_subtrees(tree in unit_tree()) {
        let mut seen = Vec::new();
        visit_current_unit(&tree, |n| {
            seen.push(*n);
            VisitSignal::Descend
        });

        prop_assert_eq!(kinds(seen.iter().copied()), kinds(scoped_nodes(&tree)));
        prop_assert!(seen.iter().skip(1).all(|n| !n.location.is_foreign_to(MAIN)));
    }

    #[test]
    fn scoped_walk_is_a_filter_over_the_unrestricted_walk(tree in unit_tree()) {
        let (unrestricted, _) =
            walk_kinds(&tree, WalkPolicy::Unrestricted, |_| VisitSignal::Descend);
        let (scoped, _) = walk_kinds(&tree, WalkPolicy::CurrentFile, |_| VisitSignal::Descend);
        let mut rest = unrestricted.iter();
        prop_assert!(scoped.iter().all(|k| rest.any(|u| u == k)));
    }

    #[test]
    fn scoped_abort_visits_the_scoped_prefix(
        tree in unit_tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let scoped = scoped_nodes(&tree);
        let stop_at = pick.index(scoped.len());
        let stop_kind = scoped[stop_at].kind.clone();

        let (seen, outcome) = walk_kinds(&tree, WalkPolicy::CurrentFile, |n| {
            if n.kind == stop_kind {
                VisitSignal::Abort
            } else {
                VisitSignal::Descend
            }
        });

        prop_assert_eq!(outcome, WalkOutcome::Aborted);
        prop_assert_eq!(seen, kinds(scoped[..=stop_at].iter().copied()));
    }

    #[test]
    fn scoped_prune_hides_descendants_only(
        tree in unit_tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let scoped = scoped_nodes(&tree);
        let target = scoped[pick.index(scoped.len())];
        let hidden = descendants(target);

        let (seen, outcome) = walk_kinds(&tree, WalkPolicy::CurrentFile, |n| {
            VisitSignal::from(n.kind != target.kind)
        });

        prop_assert_eq!(outcome, WalkOutcome::Completed);
        prop_assert_eq!(seen, without(kinds(scoped), &hidden));
    }

    #[test]
    fn scoped_visitor_error_is_returned_unchanged(
        tree in unit_tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let scoped = scoped_nodes(&tree);
        let fail_kind = scoped[pick.index(scoped.len())].kind.clone();

        let result: Result<WalkOutcome, String> = try_traverse(
            &tree,
            |n: &&Node| {
                if n.kind == fail_kind {
                    Err(n.kind.clone())
                } else {
                    Ok(VisitSignal::Descend)
                }
            },
            WalkPolicy::CurrentFile,
        );
        prop_assert_eq!(result, Err(fail_kind));
    }

    #[test]
    fn bool_policy_matches_named_entry_point(tree in unit_tree()) {
        let (by_bool, _) = walk_kinds(&tree, WalkPolicy::from(true), |_| VisitSignal::Descend);
        let mut by_name = Vec::new();
        visit_current_unit(&tree, |n: &&Node| {
            by_name.push(n.kind.clone());
            VisitSignal::Descend
        });
        prop_assert_eq!(by_bool, by_name);
    }
}

// =============================================================================
// Concurrency
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn concurrent_walks_over_one_tree_agree(tree in unit_tree()) {
        let results: Vec<Vec<String>> = (0..16)
            .into_par_iter()
            .map(|i| {
                let policy = WalkPolicy::from(i % 2 == 0);
                walk_kinds(&tree, policy, |_| VisitSignal::Descend).0
            })
            .collect();
        for (i, result) in results.iter().enumerate() {
            prop_assert_eq!(result, &results[i % 2]);
        }
    }
}

// =============================================================================
// Other node representations
// =============================================================================

struct ArenaEntry {
    file: Option<&'static str>,
    children: Vec<usize>,
}

/// A node handle that is an index into a parser-owned arena.
#[derive(Clone, Copy)]
struct ArenaNode<'a> {
    arena: &'a [ArenaEntry],
    index: usize,
}

impl AstNode for ArenaNode<'_> {
    fn location(&self) -> SourceLocation {
        match self.arena[self.index].file {
            Some(file) => SourceLocation::new(file, 1, 1),
            None => SourceLocation::synthetic(),
        }
    }

    fn extent(&self) -> Extent {
        Extent::new(self.location(), self.location())
    }

    fn children(&self) -> Vec<Self> {
        self.arena[self.index]
            .children
            .iter()
            .map(|&index| ArenaNode {
                arena: self.arena,
                index,
            })
            .collect()
    }
}

#[test]
fn arena_handles_walk_like_owned_trees() {
    let arena = [
        ArenaEntry { file: Some("main.cpp"), children: vec![1, 3, 4] },
        ArenaEntry { file: Some("task.hpp"), children: vec![2] },
        ArenaEntry { file: Some("main.cpp"), children: vec![] },
        ArenaEntry { file: None, children: vec![] },
        ArenaEntry { file: Some("main.cpp"), children: vec![] },
    ];
    let root = ArenaNode { arena: &arena, index: 0 };

    let mut all = Vec::new();
    visit_all(root, |n: &ArenaNode| {
        all.push(n.index);
        VisitSignal::Descend
    });
    assert_eq!(all, [0, 1, 2, 3, 4]);

    let mut collector = PreorderCollector::new();
    walk(root, &mut collector, &WalkOptions::current_file());
    let scoped: Vec<usize> = collector.nodes().iter().map(|e| e.node.index).collect();
    assert_eq!(scoped, [0, 3, 4]);
}
