#![cfg(feature = "collection")]
//! Unit tests for `extend` and `defaults`.

use rstest::rstest;
use std::collections::{BTreeMap, HashMap};
use underbar::collection::{defaults, extend};

fn map(entries: &[(&'static str, i32)]) -> BTreeMap<&'static str, i32> {
    entries.iter().copied().collect()
}

// =============================================================================
// extend
// =============================================================================

#[rstest]
#[case(map(&[]), vec![map(&[("a", 1)])], map(&[("a", 1)]))]
#[case(map(&[("a", 1)]), vec![map(&[("a", 2)]), map(&[("a", 3)])], map(&[("a", 3)]))]
#[case(map(&[("a", 1)]), vec![map(&[("b", 2)])], map(&[("a", 1), ("b", 2)]))]
#[case(map(&[("a", 1)]), vec![], map(&[("a", 1)]))]
fn extend_overwrites_with_later_sources(
    #[case] mut target: BTreeMap<&'static str, i32>,
    #[case] sources: Vec<BTreeMap<&'static str, i32>>,
    #[case] expected: BTreeMap<&'static str, i32>,
) {
    extend(&mut target, &sources);
    assert_eq!(target, expected);
}

#[rstest]
fn extend_returns_target_for_chaining() {
    let mut target = HashMap::from([("x", 0)]);
    let source = HashMap::from([("y", 1)]);

    let length = extend(&mut target, [&source]).len();

    assert_eq!(length, 2);
    assert_eq!(source.len(), 1);
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
#[case(map(&[("a", 1)]), vec![map(&[("a", 9), ("b", 2)])], map(&[("a", 1), ("b", 2)]))]
#[case(map(&[]), vec![map(&[("a", 1)]), map(&[("a", 2)])], map(&[("a", 1)]))]
#[case(map(&[("a", 1)]), vec![], map(&[("a", 1)]))]
fn defaults_only_fills_missing_keys(
    #[case] mut target: BTreeMap<&'static str, i32>,
    #[case] sources: Vec<BTreeMap<&'static str, i32>>,
    #[case] expected: BTreeMap<&'static str, i32>,
) {
    defaults(&mut target, &sources);
    assert_eq!(target, expected);
}

#[rstest]
fn defaults_then_extend_compose() {
    let mut settings = HashMap::from([("theme", "dark")]);
    let fallback = HashMap::from([("theme", "light"), ("lang", "en")]);
    let overrides = HashMap::from([("lang", "fr")]);

    extend(defaults(&mut settings, [&fallback]), [&overrides]);

    assert_eq!(settings["theme"], "dark");
    assert_eq!(settings["lang"], "fr");
}
