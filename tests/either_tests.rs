//! Unit tests for the Either container.
//!
//! Covers construction (including the panic-catching boundary),
//! branch-selective transformation, recovery, observers, the case-map
//! fold, swap, and std interop.

#![cfg(feature = "control")]

use railcar::control::{CapturedError, Either, EitherCases};
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn right_and_left_construct_their_variants() {
    let success: Either<String, i32> = Either::right(42);
    assert!(success.is_right());
    assert!(!success.is_left());

    let failure: Either<String, i32> = Either::left("gone".to_string());
    assert!(failure.is_left());
}

#[rstest]
fn catch_converts_a_returned_value_to_right() {
    assert_eq!(Either::catch(|| 21 * 2), Either::right(42));
}

#[rstest]
fn catch_wraps_a_message_panic_preserving_the_message() {
    let failure: Either<CapturedError, i32> = Either::catch(|| panic!("x"));
    assert_eq!(failure, Either::left(CapturedError::msg("x")));
}

#[rstest]
fn catch_wraps_an_opaque_panic_as_unknown_error() {
    let failure: Either<CapturedError, i32> = Either::catch(|| std::panic::panic_any(vec![1u8]));
    assert_eq!(failure, Either::left(CapturedError::msg("Unknown error")));
}

// =============================================================================
// Branch-Selective Transformation
// =============================================================================

#[rstest]
fn map_touches_only_the_right_branch() {
    let success: Either<String, i32> = Either::right(2);
    assert_eq!(success.map(|n| n + 1), Either::right(3));

    let failure: Either<String, i32> = Either::left("gone".to_string());
    assert_eq!(failure.map(|n| n + 1), Either::left("gone".to_string()));
}

#[rstest]
fn map_left_touches_only_the_left_branch() {
    let failure: Either<i32, String> = Either::left(42);
    assert_eq!(failure.map_left(|n| n * 2), Either::left(84));

    let success: Either<i32, String> = Either::right("ok".to_string());
    assert_eq!(success.map_left(|n: i32| n * 2), Either::right("ok".to_string()));
}

#[rstest]
fn bimap_applies_exactly_one_function() {
    let success: Either<i32, String> = Either::right("hello".to_string());
    assert_eq!(success.bimap(|n: i32| n * 2, |s| s.len()), Either::right(5));

    let failure: Either<i32, String> = Either::left(21);
    assert_eq!(failure.bimap(|n| n * 2, |s: String| s.len()), Either::left(42));
}

#[rstest]
fn flat_map_chains_only_the_right_branch() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Either::<String, i32>::right(n / 2)
        } else {
            Either::left("odd".to_string())
        }
    };

    assert_eq!(Either::right(8).flat_map(halve), Either::right(4));
    assert_eq!(Either::right(3).flat_map(halve), Either::left("odd".to_string()));

    let failure: Either<String, i32> = Either::left("gone".to_string());
    assert_eq!(failure.flat_map(halve), Either::left("gone".to_string()));
}

#[rstest]
fn flat_map_left_may_change_the_failure_type() {
    let failure: Either<String, i32> = Either::left("primary down".to_string());
    let fallback: Either<u8, i32> = failure.flat_map_left(|_| Either::right(7));
    assert_eq!(fallback, Either::right(7));
}

#[rstest]
fn recover_supplies_a_fallback_for_the_failure_track() {
    let failure: Either<String, i32> = Either::left("cache miss".to_string());
    let recovered: Either<String, i32> = failure.recover(|_| Either::right(0));
    assert_eq!(recovered, Either::right(0));

    let success: Either<String, i32> = Either::right(1);
    let untouched: Either<String, i32> = success.recover(|_| Either::right(0));
    assert_eq!(untouched, Either::right(1));
}

// =============================================================================
// Observers and Extraction
// =============================================================================

#[rstest]
fn observers_fire_for_their_branch_only() {
    let mut right_seen = false;
    let mut left_seen = false;

    let value: Either<String, i32> = Either::right(1);
    let unchanged = value
        .on_right(|_| right_seen = true)
        .on_left(|_| left_seen = true);

    assert!(right_seen);
    assert!(!left_seen);
    assert_eq!(unchanged, Either::right(1));
}

#[rstest]
fn extraction_returns_the_matching_payload() {
    let failure: Either<i32, String> = Either::left(42);
    assert_eq!(failure.left_ref(), Some(&42));
    assert_eq!(failure.right_ref(), None);
    assert_eq!(failure.left_value(), Some(42));

    let success: Either<i32, String> = Either::right("hello".to_string());
    assert_eq!(success.right_value(), Some("hello".to_string()));
}

#[rstest]
fn get_or_else_falls_back_only_on_the_failure_track() {
    assert_eq!(Either::<String, i32>::right(1).get_or_else(9), 1);
    assert_eq!(Either::<String, i32>::left("x".to_string()).get_or_else(9), 9);
}

// =============================================================================
// Fold and Swap
// =============================================================================

#[rstest]
fn fold_dispatches_on_the_current_branch() {
    let success: Either<i32, String> = Either::right("hello".to_string());
    let rendered = success.fold(EitherCases {
        if_right: |s: String| s,
        if_left: |n: i32| n.to_string(),
    });
    assert_eq!(rendered, "hello");

    let failure: Either<i32, String> = Either::left(42);
    let rendered = failure.fold(EitherCases {
        if_right: |s: String| s,
        if_left: |n: i32| n.to_string(),
    });
    assert_eq!(rendered, "42");
}

#[rstest]
fn swap_exchanges_the_tracks() {
    let failure: Either<i32, String> = Either::left(42);
    assert_eq!(failure.swap(), Either::right(42));

    let success: Either<i32, String> = Either::right("hello".to_string());
    assert_eq!(success.swap(), Either::left("hello".to_string()));
}

// =============================================================================
// Std Interop
// =============================================================================

#[rstest]
fn converts_to_and_from_result() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::right(42));

    let back: Result<i32, String> = either.into();
    assert_eq!(back, Ok(42));
}
