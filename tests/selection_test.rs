//! Tests for Selection path conversions

use rstest::rstest;

use treegrid::{NodePath, Selection};

fn path(names: &[&str]) -> NodePath {
    NodePath::from_names(names.iter().copied())
}

fn paths(list: &[&[&str]]) -> Vec<NodePath> {
    list.iter().map(|p| path(p)).collect()
}

// ============================================================
// Depth
// ============================================================

#[rstest]
#[case(paths(&[]), 0)]
#[case(paths(&[&["a"]]), 1)]
#[case(paths(&[&["a", "aa"], &["b"]]), 2)]
#[case(paths(&[&["a", "aa", "aaa"]]), 3)]
fn given_path_list_when_measuring_depth_then_matches(
    #[case] list: Vec<NodePath>,
    #[case] expected: usize,
) {
    let selection = Selection::from_paths(&list);
    assert_eq!(selection.depth(), expected);
}

// ============================================================
// Conversions
// ============================================================

#[test]
fn given_paths_when_building_selection_then_nested_shape_matches() {
    // Arrange
    let list = paths(&[&["a", "aa"]]);

    // Act
    let selection = Selection::from_paths(&list);

    // Assert
    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(json, serde_json::json!({"a": {"aa": {}}}));
}

#[test]
fn given_selection_when_enumerating_then_maximal_paths_depth_first() {
    let selection = Selection::from_paths(&paths(&[&["b"], &["a", "ab"], &["a", "aa"]]));

    let result = selection.to_paths();

    assert_eq!(result, paths(&[&["a", "aa"], &["a", "ab"], &["b"]]));
}

#[test]
fn given_prefix_free_path_list_when_round_tripping_then_same_frontier() {
    // No path in the list is a prefix of another
    let list = paths(&[&["a", "aa"], &["a", "ab", "x"], &["b"]]);

    let round_tripped = Selection::from_paths(&list).to_paths();

    let mut expected = list.clone();
    expected.sort();
    let mut actual = round_tripped;
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn given_path_and_its_prefix_when_building_then_prefix_is_absorbed() {
    // from_paths is not the literal inverse of to_paths: a prefix merges
    // into the deeper path's chain and the maximal frontier stays stable
    let list = paths(&[&["a"], &["a", "aa"]]);

    let selection = Selection::from_paths(&list);

    assert_eq!(selection.to_paths(), paths(&[&["a", "aa"]]));
    assert_eq!(Selection::from_paths(&selection.to_paths()), selection);
}

#[test]
fn given_empty_paths_when_building_then_contribute_nothing() {
    let list = vec![NodePath::root(), path(&["a"])];

    let selection = Selection::from_paths(&list);

    assert_eq!(selection.to_paths(), paths(&[&["a"]]));
}

// ============================================================
// Chain queries
// ============================================================

#[test]
fn given_selection_when_querying_chains_then_ancestors_count_as_contained() {
    let selection = Selection::from_paths(&paths(&[&["a", "aa"]]));

    assert!(selection.contains_prefix(&path(&["a"])));
    assert!(selection.contains_prefix(&path(&["a", "aa"])));
    assert!(!selection.contains_prefix(&path(&["a", "aa", "deeper"])));
    assert!(!selection.contains_prefix(&path(&["b"])));
}

#[test]
fn given_uneven_chains_when_listing_prefixes_then_short_chains_not_padded() {
    let selection = Selection::from_paths(&paths(&[&["a", "aa"], &["b"]]));

    assert_eq!(selection.prefixes_at(1), paths(&[&["a"], &["b"]]));
    assert_eq!(selection.prefixes_at(2), paths(&[&["a", "aa"]]));
    assert!(selection.prefixes_at(3).is_empty());
}
