//! Sparse tree-shaped selection state and its path-list representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::path::NodePath;

/// Sparse nested selection, isomorphic to a subset of the source tree's
/// shape.
///
/// A name appears at some level iff that path or a descendant of it is
/// selected; an empty nested map at a leaf means exactly that path is
/// selected. The selection is never validated against the tree — entries
/// naming nonexistent nodes simply never materialize into visible rows.
///
/// Updates are persistent in style: all mutating operations live in
/// [`gestures`](crate::domain::gestures) and return fresh values built via
/// the path-list representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, Selection>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Nesting depth: 0 for the empty selection, else 1 + the maximum depth
    /// of any nested selection.
    pub fn depth(&self) -> usize {
        self.0
            .values()
            .map(|sub| 1 + sub.depth())
            .max()
            .unwrap_or(0)
    }

    /// Every maximal selected path, depth-first.
    ///
    /// A maximal path is one with no selected descendant. The empty
    /// selection yields no paths.
    pub fn to_paths(&self) -> Vec<NodePath> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.collect_paths(&mut prefix, &mut out);
        out
    }

    fn collect_paths(&self, prefix: &mut Vec<String>, out: &mut Vec<NodePath>) {
        if self.0.is_empty() {
            if !prefix.is_empty() {
                out.push(NodePath::new(prefix.clone()));
            }
            return;
        }
        for (name, sub) in &self.0 {
            prefix.push(name.clone());
            sub.collect_paths(prefix, out);
            prefix.pop();
        }
    }

    /// Build a selection from a list of paths.
    ///
    /// Paths sharing a prefix merge into shared sub-maps; empty paths
    /// contribute nothing. This is not the literal inverse of
    /// [`to_paths`](Self::to_paths) — a path list containing both a path and
    /// its prefix collapses to the same nested shape — but reducing the
    /// result back to maximal paths is stable.
    pub fn from_paths<'a, I>(paths: I) -> Selection
    where
        I: IntoIterator<Item = &'a NodePath>,
    {
        let mut root = Selection::default();
        for path in paths {
            let mut level = &mut root;
            for name in path.iter() {
                level = level.0.entry(name.to_string()).or_default();
            }
        }
        root
    }

    /// All selected chains of exactly `len` names.
    ///
    /// A chain is a path present in the nested map at full length; chains
    /// that terminate earlier are not padded. `len == 0` yields nothing.
    pub fn prefixes_at(&self, len: usize) -> Vec<NodePath> {
        let mut out = Vec::new();
        if len == 0 {
            return out;
        }
        let mut prefix = Vec::new();
        self.collect_prefixes(len, &mut prefix, &mut out);
        out
    }

    fn collect_prefixes(&self, len: usize, prefix: &mut Vec<String>, out: &mut Vec<NodePath>) {
        for (name, sub) in &self.0 {
            prefix.push(name.clone());
            if prefix.len() == len {
                out.push(NodePath::new(prefix.clone()));
            } else {
                sub.collect_prefixes(len, prefix, out);
            }
            prefix.pop();
        }
    }

    /// True iff `path` is a chain in this selection, i.e. `path` itself or a
    /// descendant of it is selected. The root path counts as contained.
    pub fn contains_prefix(&self, path: &NodePath) -> bool {
        let mut level = self;
        for name in path.iter() {
            match level.0.get(name) {
                Some(sub) => level = sub,
                None => return false,
            }
        }
        true
    }
}
