#![cfg(feature = "transform")]
//! Unit tests for nested sequences and flattening.
//!
//! Tests cover:
//! - Depth-first, left-to-right flattening
//! - Empty sequences at every level
//! - Shallow flattening
//! - Input immutability

use rstest::rstest;
use underbar::nested;
use underbar::transform::{FlattenOptions, Nested, flatten, flatten_with};

// =============================================================================
// Full Flattening
// =============================================================================

#[rstest]
#[case(nested![1, [2, [3, [4]], 5]], vec![1, 2, 3, 4, 5])]
#[case(nested![[[[1]]], 2], vec![1, 2])]
#[case(nested![1, 2, 3], vec![1, 2, 3])]
#[case(nested![[], [[]], [[], 7]], vec![7])]
#[case(Vec::new(), Vec::new())]
fn flatten_visits_items_depth_first(#[case] input: Vec<Nested<i32>>, #[case] expected: Vec<i32>) {
    assert_eq!(flatten(&input), expected);
}

#[rstest]
fn flatten_leaves_input_untouched() {
    let input = nested!["a", ["b", ["c"]]];
    let snapshot = input.clone();

    let flat = flatten(&input);

    assert_eq!(flat, vec!["a", "b", "c"]);
    assert_eq!(input, snapshot);
}

#[rstest]
fn flatten_handles_wide_sequences() {
    let input: Vec<Nested<usize>> = (0..1_000)
        .map(|index| Nested::sequence([Nested::item(index), Nested::sequence([])]))
        .collect();

    assert_eq!(flatten(&input), (0..1_000).collect::<Vec<_>>());
}

#[rstest]
fn flatten_with_default_options_matches_flatten() {
    let input = nested![1, [2, [3]]];
    assert_eq!(
        flatten_with(&input, FlattenOptions::default()),
        Nested::from_items(flatten(&input))
    );
}

// =============================================================================
// Shallow Flattening
// =============================================================================

#[rstest]
#[case(nested![1, [2, [3, [4]]]], nested![1, 2, [3, [4]]])]
#[case(nested![[1], [2], 3], nested![1, 2, 3])]
#[case(nested![[[]]], nested![[]])]
fn shallow_flatten_removes_one_level(
    #[case] input: Vec<Nested<i32>>,
    #[case] expected: Vec<Nested<i32>>,
) {
    let options = FlattenOptions::new().shallow(true);
    assert_eq!(flatten_with(&input, options), expected);
}

// =============================================================================
// Nested Values
// =============================================================================

#[rstest]
#[case(Nested::item('x'), 0)]
#[case(Nested::sequence([]), 1)]
#[case(Nested::sequence([Nested::item('x'), Nested::sequence([Nested::item('y')])]), 2)]
fn depth_counts_sequence_levels(#[case] element: Nested<char>, #[case] expected: usize) {
    assert_eq!(element.depth(), expected);
}

#[rstest]
fn item_accessors() {
    let item = Nested::item(5);
    let sequence: Nested<i32> = Nested::from(vec![item.clone()]);

    assert!(item.is_item());
    assert_eq!(item.as_item(), Some(&5));
    assert!(sequence.is_sequence());
    assert_eq!(sequence.as_item(), None);
}
