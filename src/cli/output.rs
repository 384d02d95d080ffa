//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::{NodePath, Tree};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Format an activated grid cell (green)
pub fn activated_cell(label: &str) -> String {
    label.green().to_string()
}

/// Format a collapsed grid cell (yellow)
pub fn collapsed_cell(label: &str) -> String {
    label.yellow().to_string()
}

/// Format a placeholder grid cell (dimmed)
pub fn placeholder_cell(glyph: &str) -> String {
    glyph.dimmed().to_string()
}

/// Convert a source tree into a displayable termtree, labels included.
pub fn tree_display(tree: &Tree) -> termtree::Tree<String> {
    fn node(tree: &Tree, path: &NodePath) -> termtree::Tree<String> {
        let label = tree.label(path).to_string();
        let leaves: Vec<_> = tree
            .child_names(path)
            .into_iter()
            .map(|name| node(tree, &path.child(name)))
            .collect();
        termtree::Tree::new(label).with_leaves(leaves)
    }

    let roots: Vec<_> = tree
        .names()
        .map(|name| node(tree, &NodePath::root().child(name)))
        .collect();
    termtree::Tree::new(".".to_string()).with_leaves(roots)
}
