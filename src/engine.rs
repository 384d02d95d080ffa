//! Stateful engine facade for the rendering collaborator.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::filter::RowFilter;
use crate::domain::gestures;
use crate::domain::path::NodePath;
use crate::domain::projection;
use crate::domain::selection::Selection;
use crate::domain::tree::Tree;
use crate::domain::DomainResult;

/// The selection/projection engine behind a miller-column tree grid.
///
/// Owns the selection, the collapsed set, and the compiled filter; the
/// source tree is read-only input. A rendering collaborator feeds gestures
/// in and redraws from [`rows`](Self::rows) / [`columns`](Self::columns)
/// after every state change. All operations are synchronous and applied
/// atomically: full state in, new state out.
#[derive(Debug, Clone, Default)]
pub struct TreeGrid {
    tree: Tree,
    selection: Selection,
    collapsed: HashSet<NodePath>,
    filter: RowFilter,
}

impl TreeGrid {
    /// Engine over `tree` with nothing selected (beyond mandatory nodes).
    pub fn new(tree: Tree) -> Self {
        let mut grid = Self {
            tree,
            selection: Selection::new(),
            collapsed: HashSet::new(),
            filter: RowFilter::empty(),
        };
        grid.renormalize();
        grid
    }

    /// Engine over `tree` with `paths` preselected.
    ///
    /// Paths naming nonexistent nodes are kept in the selection but never
    /// materialize into visible rows.
    pub fn with_paths(tree: Tree, paths: &[NodePath]) -> Self {
        let mut grid = Self::new(tree);
        grid.set_paths(paths);
        grid
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Maximal selected paths, ordered depth-first.
    pub fn paths(&self) -> Vec<NodePath> {
        self.selection.to_paths()
    }

    pub fn depth(&self) -> usize {
        self.selection.depth()
    }

    pub fn filter_pattern(&self) -> &str {
        self.filter.pattern()
    }

    pub fn is_collapsed(&self, path: &NodePath) -> bool {
        self.collapsed.contains(path)
    }

    /// True iff `path` or a descendant of it is selected.
    pub fn is_activated(&self, path: &NodePath) -> bool {
        self.selection.contains_prefix(path)
    }

    /// Replace the selection from a path list.
    #[instrument(level = "debug", skip(self))]
    pub fn set_paths(&mut self, paths: &[NodePath]) {
        self.selection = Selection::from_paths(paths);
        self.renormalize();
    }

    /// Replace the selection wholesale.
    #[instrument(level = "debug", skip(self, selection))]
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.renormalize();
    }

    /// Compile and install a new filter pattern.
    ///
    /// An invalid pattern leaves the current filter untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn set_filter(&mut self, pattern: &str) -> DomainResult<()> {
        self.filter = RowFilter::new(pattern)?;
        Ok(())
    }

    /// The visible, filtered, collapse-aware rows.
    pub fn rows(&self) -> Vec<NodePath> {
        projection::rows(&self.tree, &self.selection, &self.collapsed, &self.filter)
    }

    /// The rows partitioned into `depth() + 1` columns.
    pub fn columns(&self) -> Vec<Vec<Option<NodePath>>> {
        projection::columns(&self.rows(), self.depth() + 1)
    }

    /// The distinct cell paths of column `index`, in row order.
    ///
    /// Placeholder cells are omitted and each path appears once, even when
    /// the joined-name sort interleaves branches whose names contain the
    /// separator; this is the item set the select-all gesture operates on.
    pub fn column_items(&self, index: usize) -> Vec<NodePath> {
        self.rows()
            .iter()
            .filter(|row| row.len() > index)
            .map(|row| row.prefix(index + 1))
            .unique()
            .collect()
    }

    /// Single-click on the item `name` under `parent`.
    #[instrument(level = "debug", skip(self))]
    pub fn click_item(&mut self, parent: &NodePath, name: &str) {
        let (selection, collapsed) =
            gestures::toggle(&self.selection, &self.collapsed, parent, name);
        self.selection = selection;
        self.collapsed = collapsed;
        self.renormalize();
    }

    /// Select-all click on column `index`; out-of-range columns are a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn click_select_all(&mut self, index: usize) {
        if index > self.depth() {
            debug!(index, depth = self.depth(), "select-all on absent column ignored");
            return;
        }
        let items = self.column_items(index);
        self.selection = gestures::toggle_all(&self.selection, &self.tree, &items);
        self.renormalize();
    }

    /// Hide the columns below `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn click_collapse(&mut self, path: NodePath) {
        if !path.is_empty() {
            self.collapsed.insert(path);
        }
    }

    /// Undo a collapse.
    #[instrument(level = "debug", skip(self))]
    pub fn click_expand(&mut self, path: &NodePath) {
        self.collapsed.remove(path);
    }

    pub fn toggle_collapse(&mut self, path: NodePath) {
        if self.collapsed.contains(&path) {
            self.click_expand(&path);
        } else {
            self.click_collapse(path);
        }
    }

    fn renormalize(&mut self) {
        self.selection = gestures::normalize(&self.selection, &self.tree);
    }
}
