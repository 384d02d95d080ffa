//! Row projection: which paths are visible, and in which column.

use std::collections::HashSet;

use itertools::Itertools;

use crate::domain::filter::RowFilter;
use crate::domain::path::NodePath;
use crate::domain::selection::Selection;
use crate::domain::tree::Tree;

/// Compute the ordered list of visible rows.
///
/// Pipeline:
/// 1. candidates: root-level names plus the children of every selected
///    chain, at every depth;
/// 2. frontier: drop candidates that are a strict prefix of another
///    candidate;
/// 3. filter: drop rows whose joined-name string does not match;
/// 4. collapse: replace rows under a collapsed ancestor with that ancestor
///    (the shallowest collapsed ancestor wins, so nothing below a collapsed
///    path ever surfaces);
/// 5. sort by joined-name string and drop adjacent duplicates.
pub fn rows(
    tree: &Tree,
    selection: &Selection,
    collapsed: &HashSet<NodePath>,
    filter: &RowFilter,
) -> Vec<NodePath> {
    let mut candidates: Vec<NodePath> = tree
        .names()
        .map(|name| NodePath::root().child(name))
        .collect();
    for len in 1..=selection.depth() {
        for path in selection.prefixes_at(len) {
            for name in tree.child_names(&path) {
                candidates.push(path.child(name));
            }
        }
    }

    candidates
        .iter()
        .filter(|row| !candidates.iter().any(|other| row.is_strict_prefix_of(other)))
        .filter(|row| filter.matches(row))
        .map(|row| collapse_row(row, collapsed))
        .sorted_by(|a, b| a.joined().cmp(&b.joined()))
        .dedup()
        .collect()
}

/// Replace `row` by its shallowest strict-ancestor prefix present in the
/// collapsed set, if any.
fn collapse_row(row: &NodePath, collapsed: &HashSet<NodePath>) -> NodePath {
    for len in 1..row.len() {
        let ancestor = row.prefix(len);
        if collapsed.contains(&ancestor) {
            return ancestor;
        }
    }
    row.clone()
}

/// Partition `rows` into `count` columns.
///
/// Column `c` holds the first `c + 1` names of each row that is long
/// enough, `None` (a placeholder cell) otherwise.
pub fn columns(rows: &[NodePath], count: usize) -> Vec<Vec<Option<NodePath>>> {
    (0..count)
        .map(|c| {
            rows.iter()
                .map(|row| (row.len() > c).then(|| row.prefix(c + 1)))
                .collect()
        })
        .collect()
}
