//! End-to-end tests for the TreeGrid engine facade

use treegrid::util::testing::init_test_setup;
use treegrid::{DomainError, NodePath, Tree, TreeGrid};

fn path(names: &[&str]) -> NodePath {
    NodePath::from_names(names.iter().copied())
}

fn paths(list: &[&[&str]]) -> Vec<NodePath> {
    list.iter().map(|p| path(p)).collect()
}

fn flat_tree() -> Tree {
    serde_json::from_str(r#"{"a":{"children":{"aa":{},"ab":{}}},"b":{}}"#).unwrap()
}

#[test]
fn given_preselection_when_constructed_then_selection_and_rows_match() {
    init_test_setup();
    let engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a", "aa"]]));

    assert_eq!(engine.depth(), 2);
    assert_eq!(engine.paths(), paths(&[&["a", "aa"]]));
    assert_eq!(engine.rows(), paths(&[&["a", "aa"], &["a", "ab"], &["b"]]));
    assert_eq!(engine.columns().len(), 3);
}

#[test]
fn given_click_sequence_when_selecting_then_rows_follow_each_change() {
    init_test_setup();
    let mut engine = TreeGrid::new(flat_tree());
    assert_eq!(engine.rows(), paths(&[&["a"], &["b"]]));

    engine.click_item(&NodePath::root(), "a");
    assert_eq!(engine.paths(), paths(&[&["a"]]));
    assert_eq!(engine.rows(), paths(&[&["a", "aa"], &["a", "ab"], &["b"]]));

    engine.click_item(&path(&["a"]), "aa");
    assert_eq!(engine.paths(), paths(&[&["a", "aa"]]));

    // clicking the selected item again collapses back to its parent
    engine.click_item(&path(&["a"]), "aa");
    assert_eq!(engine.paths(), paths(&[&["a"]]));
}

#[test]
fn given_column_when_selecting_all_then_whole_column_toggles() {
    init_test_setup();
    let mut engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a"]]));

    assert_eq!(engine.column_items(1), paths(&[&["a", "aa"], &["a", "ab"]]));

    engine.click_select_all(1);
    assert_eq!(engine.paths(), paths(&[&["a", "aa"], &["a", "ab"]]));

    engine.click_select_all(1);
    assert_eq!(engine.paths(), paths(&[&["a"]]));
}

#[test]
fn given_out_of_range_column_when_selecting_all_then_no_op() {
    init_test_setup();
    let mut engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a", "aa"]]));
    let before = engine.paths();

    engine.click_select_all(7);

    assert_eq!(engine.paths(), before);
}

#[test]
fn given_collapse_gestures_when_projecting_then_rows_fold_and_restore() {
    init_test_setup();
    let mut engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a", "aa"]]));
    let expanded = engine.rows();

    engine.click_collapse(path(&["a"]));
    assert!(engine.is_collapsed(&path(&["a"])));
    assert_eq!(engine.rows(), paths(&[&["a"], &["b"]]));

    engine.click_expand(&path(&["a"]));
    assert_eq!(engine.rows(), expanded);
}

#[test]
fn given_collapsed_item_when_deselected_then_collapse_state_cleared() {
    init_test_setup();
    let mut engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a", "aa"]]));
    engine.click_collapse(path(&["a", "aa"]));

    engine.click_item(&path(&["a"]), "aa");

    assert!(!engine.is_collapsed(&path(&["a", "aa"])));
    assert_eq!(engine.paths(), paths(&[&["a"]]));
}

#[test]
fn given_filter_when_set_then_rows_narrow_and_invalid_patterns_error() {
    init_test_setup();
    let mut engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a", "aa"]]));

    engine.set_filter("^b").unwrap();
    assert_eq!(engine.rows(), paths(&[&["b"]]));

    let err = engine.set_filter("(unclosed").unwrap_err();
    assert!(matches!(err, DomainError::InvalidFilterPattern { .. }));
    // the previous filter stays installed
    assert_eq!(engine.filter_pattern(), "^b");
    assert_eq!(engine.rows(), paths(&[&["b"]]));

    engine.set_filter("").unwrap();
    assert_eq!(engine.rows(), paths(&[&["a", "aa"], &["a", "ab"], &["b"]]));
}

#[test]
fn given_mandatory_nodes_when_gestures_apply_then_selection_self_heals() {
    init_test_setup();
    let tree: Tree = serde_json::from_str(
        r#"{"a":{"children":{"aa":{"mandatory":true},"ab":{}}},"m":{"mandatory":true}}"#,
    )
    .unwrap();

    // the root column is always rendered, so "m" is selected immediately
    let mut engine = TreeGrid::new(tree);
    assert_eq!(engine.paths(), paths(&[&["m"]]));

    // selecting "a" renders its children's column and heals in "aa"
    engine.click_item(&NodePath::root(), "a");
    assert_eq!(engine.paths(), paths(&[&["a", "aa"], &["m"]]));
}

#[test]
fn given_paths_when_crossing_the_boundary_then_json_arrays_of_strings() {
    init_test_setup();
    let engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["a", "aa"]]));

    let json = serde_json::to_string(&engine.paths()).unwrap();
    assert_eq!(json, r#"[["a","aa"]]"#);

    let selection = serde_json::to_value(engine.selection()).unwrap();
    assert_eq!(selection, serde_json::json!({"a": {"aa": {}}}));
}

#[test]
fn given_separator_colliding_names_when_listing_column_items_then_each_item_once() {
    init_test_setup();
    // "a c" sorts between the joined forms "a b" and "a z", so the row
    // order interleaves the two branches and column 0 repeats "a"
    // non-adjacently
    let tree: Tree = serde_json::from_str(r#"{"a":{"children":{"b":{},"z":{}}},"a c":{}}"#).unwrap();
    let mut engine = TreeGrid::with_paths(tree, &paths(&[&["a", "b"]]));
    assert_eq!(engine.rows(), paths(&[&["a", "b"], &["a c"], &["a", "z"]]));

    assert_eq!(engine.column_items(0), paths(&[&["a"], &["a c"]]));

    // "a" is already activated, so select-all only adds "a c" — and adds
    // it exactly once
    engine.click_select_all(0);
    assert_eq!(engine.paths(), paths(&[&["a", "b"], &["a c"]]));
}

#[test]
fn given_stale_preselection_when_projecting_then_degrades_to_visible_tree() {
    init_test_setup();
    let engine = TreeGrid::with_paths(flat_tree(), &paths(&[&["gone", "node"]]));

    // the stale path stays observable but contributes no rows
    assert_eq!(engine.paths(), paths(&[&["gone", "node"]]));
    assert_eq!(engine.rows(), paths(&[&["a"], &["b"]]));
}
