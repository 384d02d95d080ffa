//! Selection gestures: single toggle, column select-all, and the mandatory
//! normalization invariant.
//!
//! Every gesture is a pure transform from `(selection, collapsed)` to new
//! values; the current state is read in full, a new state computed, and
//! nothing mutated in place.

use std::collections::HashSet;

use crate::domain::path::NodePath;
use crate::domain::selection::Selection;
use crate::domain::tree::{Tree, TreeNode};

/// Toggle the node `name` under `parent`.
///
/// If the clicked path or any descendant of it is selected, this is a
/// deselect: all such paths are removed and `parent` selected instead,
/// collapsing the selection back up one level. The clicked path is also
/// removed from the collapsed set so a later reselection starts expanded.
/// Otherwise the clicked path is added, leaving unrelated selections
/// untouched.
pub fn toggle(
    selection: &Selection,
    collapsed: &HashSet<NodePath>,
    parent: &NodePath,
    name: &str,
) -> (Selection, HashSet<NodePath>) {
    let path = parent.child(name);
    let mut paths = selection.to_paths();

    if paths.iter().any(|p| path.is_prefix_of(p)) {
        paths.retain(|p| !path.is_prefix_of(p));
        paths.push(parent.clone());
        let mut collapsed = collapsed.clone();
        collapsed.remove(&path);
        (Selection::from_paths(&paths), collapsed)
    } else {
        paths.push(path);
        (Selection::from_paths(&paths), collapsed.clone())
    }
}

/// Apply the select-all gesture to one rendered column.
///
/// `column_items` are the distinct cell paths of the column; mandatory
/// items are skipped (the UI renders them disabled). If any remaining item
/// is not yet activated the gesture selects every such item, otherwise it
/// deselects all of them. Activation is decided against the pre-gesture
/// selection; the add/collapse rule is the same as for a single toggle.
pub fn toggle_all(selection: &Selection, tree: &Tree, column_items: &[NodePath]) -> Selection {
    let items: Vec<&NodePath> = column_items
        .iter()
        .filter(|item| !tree.node_at(item).mandatory)
        .collect();

    let selecting = items.iter().any(|item| !selection.contains_prefix(item));

    let mut paths = selection.to_paths();
    for item in items {
        let activated = selection.contains_prefix(item);
        if activated == selecting {
            continue;
        }
        if paths.iter().any(|p| item.is_prefix_of(p)) {
            paths.retain(|p| !item.is_prefix_of(p));
            paths.push(item.parent());
        } else {
            paths.push((*item).clone());
        }
    }
    Selection::from_paths(&paths)
}

/// Enforce the mandatory-node invariant: every rendered column's mandatory
/// children are selected.
///
/// The root column is always rendered, so root-level mandatory nodes are
/// always selected; a selected chain renders its children's column, so its
/// mandatory children are inserted, recursively along mandatory chains.
/// Idempotent; applied by the engine after construction and after every
/// gesture rather than as a render side effect.
pub fn normalize(selection: &Selection, tree: &Tree) -> Selection {
    fn walk(selection: &Selection, level: &Tree) -> Selection {
        let mut paths = Vec::new();
        collect(selection, level, &mut Vec::new(), &mut paths);
        Selection::from_paths(&paths)
    }

    fn collect(
        selection: &Selection,
        level: &Tree,
        prefix: &mut Vec<String>,
        out: &mut Vec<NodePath>,
    ) {
        let mandatory_children: Vec<(&str, &TreeNode)> = level
            .iter()
            .filter(|(name, node)| node.mandatory && !has_entry(selection, name))
            .collect();

        if selection.is_empty() && mandatory_children.is_empty() {
            if !prefix.is_empty() {
                out.push(NodePath::new(prefix.clone()));
            }
            return;
        }

        let empty = Tree::new();
        for (name, sub) in selection.entries() {
            let children = level.get(name).map(|n| &n.children);
            prefix.push(name.to_string());
            collect(sub, children.unwrap_or(&empty), prefix, out);
            prefix.pop();
        }
        for (name, node) in mandatory_children {
            prefix.push(name.to_string());
            collect(&Selection::new(), &node.children, prefix, out);
            prefix.pop();
        }
    }

    fn has_entry(selection: &Selection, name: &str) -> bool {
        selection.entries().any(|(n, _)| n == name)
    }

    walk(selection, tree)
}
