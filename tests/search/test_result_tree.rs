// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Result tree folding tests

use docsearch_node::search::{NodeId, NodeKind, ResultTree};

fn count_nodes(tree: &ResultTree, id: NodeId) -> usize {
    1 + tree
        .node(id)
        .children()
        .iter()
        .map(|&c| count_nodes(tree, c))
        .sum::<usize>()
}

#[test]
fn test_leaf_count_equals_distinct_paths() {
    let paths = [
        "a/b/c.html",
        "a/b/d.html",
        "a/e.html",
        "f.html",
        "g/h/i/j.html",
    ];
    let tree = ResultTree::from_paths(paths);
    assert_eq!(tree.leaf_count(), paths.len());
}

#[test]
fn test_prefixes_shared_not_duplicated() {
    let tree = ResultTree::from_paths(["a/b/c.html", "a/b/d.html", "a/e.html"]);
    // root, a, b, c.html, d.html, e.html
    assert_eq!(count_nodes(&tree, tree.root()), 6);
}

#[test]
fn test_labels_unique_per_parent() {
    let tree = ResultTree::from_paths(["x/y.html", "x/z/y.html", "x/y.html", "w/x/y.html"]);

    fn check(tree: &ResultTree, id: NodeId) {
        let mut seen = std::collections::HashSet::new();
        for &child in tree.node(id).children() {
            assert!(seen.insert(tree.node(child).label().to_string()));
            check(tree, child);
        }
    }
    check(&tree, tree.root());
    assert_eq!(tree.leaf_count(), 3);
}

#[test]
fn test_kind_matches_children() {
    let tree = ResultTree::from_paths(["d/f.html"]);
    let root = tree.node(tree.root());
    match root.kind() {
        NodeKind::Branch(children) => {
            assert_eq!(children.len(), 1);
            assert!(tree.node(children[0]).kind() != NodeKind::Leaf);
        }
        NodeKind::Leaf => panic!("root should be a branch"),
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let paths = ["b/2.html", "a/1.html", "b/1.html"];
    let first = ResultTree::from_paths(paths).render_html("static");
    let second = ResultTree::from_paths(paths).render_html("static");
    assert_eq!(first, second);

    let b = first.find("<li>b<ul>").unwrap();
    let a = first.find("<li>a<ul>").unwrap();
    assert!(b < a);
    assert!(first.find("/static/b/2.html").unwrap() < first.find("/static/b/1.html").unwrap());
}

#[test]
fn test_non_ascii_segments_linked_encoded() {
    let tree = ResultTree::from_paths(["документы/отчёт.html"]);
    let html = tree.render_html("static");
    assert!(html.contains("<li>документы<ul>"));
    assert!(html.contains(">отчёт.html</a>"));
    assert!(html.contains("href=\"/static/%D0%B4"));
}
