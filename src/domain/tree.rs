//! Source tree structure and read-only accessors.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::domain::path::NodePath;

fn is_false(b: &bool) -> bool {
    !*b
}

/// A node in the source tree.
///
/// Absent nodes behave as the default: leaf, non-mandatory, unlabeled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Child nodes, keyed by name.
    #[serde(default, skip_serializing_if = "Tree::is_empty")]
    pub children: Tree,
    /// Display label; falls back to the node name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Mandatory nodes stay selected once their column is rendered and
    /// cannot be deselected.
    #[serde(default, skip_serializing_if = "is_false")]
    pub mandatory: bool,
}

impl TreeNode {
    fn empty() -> &'static TreeNode {
        static EMPTY: OnceLock<TreeNode> = OnceLock::new();
        EMPTY.get_or_init(TreeNode::default)
    }
}

/// Tree-shaped source data: a mapping from node name to [`TreeNode`].
///
/// Supplied by the caller and never mutated by the engine. Names are unique
/// among siblings by construction of the map; cycle freedom is the caller's
/// responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree(BTreeMap<String, TreeNode>);

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Root-level node names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, node: TreeNode) {
        self.0.insert(name.into(), node);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve the node addressed by `path`.
    ///
    /// Missing intermediate or final entries resolve to the empty node
    /// rather than erroring, so stale or external paths degrade to leaf,
    /// non-mandatory, unlabeled behavior. The root path resolves to the
    /// empty node as well; its children are the root names.
    pub fn node_at(&self, path: &NodePath) -> &TreeNode {
        let Some(last) = path.last() else {
            return TreeNode::empty();
        };
        let mut level = self;
        for name in path.iter().take(path.len() - 1) {
            level = match level.get(name) {
                Some(node) => &node.children,
                None => return TreeNode::empty(),
            };
        }
        level.get(last).unwrap_or_else(|| TreeNode::empty())
    }

    /// Names of the children at `path`; root names for the root path.
    pub fn child_names(&self, path: &NodePath) -> Vec<&str> {
        if path.is_empty() {
            self.names().collect()
        } else {
            self.node_at(path).children.names().collect()
        }
    }

    /// Display label for the node at `path`: its `text` if present, else its
    /// last name, else the empty string.
    pub fn label<'a>(&'a self, path: &'a NodePath) -> &'a str {
        self.node_at(path)
            .text
            .as_deref()
            .or_else(|| path.last())
            .unwrap_or("")
    }
}

impl FromIterator<(String, TreeNode)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, TreeNode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
