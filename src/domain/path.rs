//! Node paths: ordered name sequences addressing nodes in a tree.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Ordered sequence of node names from a root to a descendant.
///
/// Uniquely addresses a node in a [`Tree`](crate::domain::Tree). Identity is
/// structural equality of the name sequence; at the serialization boundary a
/// path is a JSON array of strings, which is safe for arbitrary names. The
/// empty path stands for the root pseudo-node in internal helpers and never
/// appears as a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Convenience constructor for literal paths.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Last name of the path, `None` for the root path.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path extended by one child name.
    pub fn child(&self, name: &str) -> NodePath {
        let mut names = self.0.clone();
        names.push(name.to_string());
        NodePath(names)
    }

    /// Path with the last name removed; the root path is its own parent.
    pub fn parent(&self) -> NodePath {
        NodePath(self.0[..self.0.len().saturating_sub(1)].to_vec())
    }

    /// The first `len` names as a new path.
    ///
    /// Lengths beyond the path return the whole path.
    pub fn prefix(&self, len: usize) -> NodePath {
        NodePath(self.0[..len.min(self.0.len())].to_vec())
    }

    /// True iff `self` is a prefix of `other` (including equality).
    pub fn is_prefix_of(&self, other: &NodePath) -> bool {
        self.0.len() <= other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }

    /// True iff `self` is a prefix of `other` and strictly shorter.
    pub fn is_strict_prefix_of(&self, other: &NodePath) -> bool {
        self.0.len() < other.0.len() && self.is_prefix_of(other)
    }

    /// Space-joined name string, the representation rows are filtered and
    /// sorted by.
    pub fn joined(&self) -> String {
        self.0.iter().join(" ")
    }
}

impl From<Vec<String>> for NodePath {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.joined())
        }
    }
}
