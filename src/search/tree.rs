// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hierarchical grouping of matched paths
//!
//! Match paths are folded into a prefix tree over their `/`-separated
//! segments, so documents sharing a directory are listed under one branch.
//! Nodes live in an arena owned by the tree and refer to their children by
//! index.

use crate::utils::{escape_html, static_link};

/// Index of a node inside its [`ResultTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One path segment of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTreeNode {
    label: String,
    children: Vec<NodeId>,
}

impl PathTreeNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    /// Segment label; empty for the root
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children in first-seen order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Leaf or branch view used by rendering
    pub fn kind(&self) -> NodeKind<'_> {
        if self.children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Branch(&self.children)
        }
    }
}

/// Shape of a node at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// A matched document
    Leaf,
    /// A directory prefix shared by at least one match
    Branch(&'a [NodeId]),
}

/// Prefix tree of matched document paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTree {
    nodes: Vec<PathTreeNode>,
}

impl Default for ResultTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultTree {
    /// Tree holding only the unlabeled root
    pub fn new() -> Self {
        Self {
            nodes: vec![PathTreeNode::new("")],
        }
    }

    /// Fold paths into a tree, in order
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &PathTreeNode {
        &self.nodes[id.0]
    }

    /// Add one `/`-separated path, reusing existing nodes for shared prefixes.
    /// Empty segments are ignored.
    pub fn insert(&mut self, path: &str) {
        let mut current = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = match self.find_child(current, segment) {
                Some(child) => child,
                None => self.push_child(current, segment),
            };
        }
    }

    fn find_child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).label == label)
    }

    fn push_child(&mut self, parent: NodeId, label: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(PathTreeNode::new(label));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// True when nothing was inserted
    pub fn is_empty(&self) -> bool {
        self.node(self.root()).is_leaf()
    }

    /// Number of leaves, i.e. distinct documents
    pub fn leaf_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Render the root's children as `<li>` items linking leaves under `/<mount>/`
    pub fn render_items(&self, mount: &str) -> String {
        let mut html = String::new();
        let mut trail = Vec::new();
        for &child in self.node(self.root()).children() {
            self.render_node(child, mount, &mut trail, &mut html);
        }
        html
    }

    /// Render the whole tree as one `<ul>` listing
    pub fn render_html(&self, mount: &str) -> String {
        format!("<ul>{}</ul>", self.render_items(mount))
    }

    fn render_node<'a>(
        &'a self,
        id: NodeId,
        mount: &str,
        trail: &mut Vec<&'a str>,
        html: &mut String,
    ) {
        let node = self.node(id);
        trail.push(node.label());
        match node.kind() {
            NodeKind::Leaf => {
                html.push_str(&format!(
                    "<li><a href=\"{}\">{}</a></li>",
                    escape_html(&static_link(mount, &trail[..])),
                    escape_html(node.label())
                ));
            }
            NodeKind::Branch(children) => {
                html.push_str("<li>");
                html.push_str(&escape_html(node.label()));
                html.push_str("<ul>");
                for &child in children {
                    self.render_node(child, mount, trail, html);
                }
                html.push_str("</ul></li>");
            }
        }
        trail.pop();
    }
}
