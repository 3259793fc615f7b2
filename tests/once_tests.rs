#![cfg(feature = "function")]
//! Unit tests for the `once` combinator.
//!
//! Tests cover:
//! - Single execution of the callback
//! - Identical results for every call regardless of arguments
//! - Independent state per wrapper, shared state per shared wrapper
//! - Propagation of callback errors

use rstest::rstest;
use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use underbar::function::once;

// =============================================================================
// Single Execution
// =============================================================================

#[rstest]
#[case(2)]
#[case(5)]
#[case(100)]
fn once_runs_callback_exactly_once(#[case] call_count: usize) {
    let side_effects = Cell::new(0);
    let wrapper = once(|value: i32| {
        side_effects.set(side_effects.get() + 1);
        value * 3
    });

    let results: Vec<i32> = (0..call_count)
        .map(|index| wrapper.call(i32::try_from(index).unwrap() + 1))
        .collect();

    assert_eq!(side_effects.get(), 1);
    assert!(results.iter().all(|result| *result == 3));
    assert_eq!(results.len(), call_count);
}

#[rstest]
fn once_is_not_fired_before_first_call() {
    let wrapper = once(|()| 1);
    assert!(!wrapper.is_fired());
    wrapper.call(());
    assert!(wrapper.is_fired());
}

#[rstest]
fn once_ignores_later_arguments() {
    let wrapper = once(|(left, right): (i32, i32)| left + right);
    assert_eq!(wrapper.call((1, 2)), 3);
    assert_eq!(wrapper.call((10, 20)), 3);
}

#[rstest]
fn once_accepts_non_clone_captures() {
    let owned = vec![String::from("moved")];
    let wrapper = once(move |()| owned.len());
    assert_eq!(wrapper.call(()), 1);
    assert_eq!(wrapper.call(()), 1);
}

// =============================================================================
// State Ownership
// =============================================================================

#[rstest]
fn separate_wrappers_have_separate_state() {
    let side_effects = Cell::new(0);
    let callback = |value: i32| {
        side_effects.set(side_effects.get() + 1);
        value
    };
    let first = once(callback);
    let second = once(callback);

    assert_eq!(first.call(1), 1);
    assert_eq!(second.call(2), 2);
    assert_eq!(side_effects.get(), 2);
}

#[rstest]
fn shared_wrapper_fires_once_across_threads() {
    let side_effects = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&side_effects);
    let wrapper = Arc::new(once(move |seed: usize| {
        counter.fetch_add(1, Ordering::SeqCst);
        seed
    }));

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let wrapper = Arc::clone(&wrapper);
            thread::spawn(move || wrapper.call(index))
        })
        .collect();
    let results: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(side_effects.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|result| *result == results[0]));
}

// =============================================================================
// Error Propagation
// =============================================================================

#[rstest]
fn once_returns_callback_error_unchanged() {
    let wrapper = once(|text: &str| text.parse::<u8>());
    let first = wrapper.call("not a number");
    assert!(first.is_err());
    assert_eq!(wrapper.call("7"), first);
}
