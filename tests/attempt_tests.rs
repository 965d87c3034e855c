//! Unit tests for the Attempt container.
//!
//! Covers the execute boundary and its panic normalization, the railway
//! combinators, recovery, the sanctioned re-raise point, and the
//! case-map fold.

#![cfg(feature = "control")]

use railcar::control::{Attempt, AttemptCases, CapturedError};
use rstest::rstest;

// =============================================================================
// Execute Boundary
// =============================================================================

#[rstest]
fn execute_captures_the_computed_value() {
    assert_eq!(Attempt::execute(|| 21 * 2), Attempt::success(42));
}

#[rstest]
fn execute_preserves_a_panic_message() {
    let failed: Attempt<i32> = Attempt::execute(|| panic!("bad record"));
    assert_eq!(failed, Attempt::failure(CapturedError::msg("bad record")));
}

#[rstest]
fn execute_normalizes_an_opaque_panic_payload() {
    let failed: Attempt<i32> = Attempt::execute(|| std::panic::panic_any(7_u64));
    assert_eq!(failed, Attempt::failure(CapturedError::msg("Unknown error")));
}

#[rstest]
fn execute_wraps_a_formatted_panic_message() {
    let code = 503;
    let failed: Attempt<i32> = Attempt::execute(move || panic!("upstream returned {code}"));
    assert_eq!(
        failed,
        Attempt::failure(CapturedError::msg("upstream returned 503"))
    );
}

// =============================================================================
// Railway Combinators
// =============================================================================

#[rstest]
fn map_and_flat_map_ride_the_success_track() {
    let result = Attempt::success(2)
        .map(|n| n + 1)
        .flat_map(|n| Attempt::success(n * 10));
    assert_eq!(result, Attempt::success(30));
}

#[rstest]
fn a_failure_rides_through_unchanged() {
    let failed: Attempt<i32> = Attempt::failure(CapturedError::msg("stale"));
    let result = failed
        .map(|n| n + 1)
        .flat_map(|n| Attempt::success(n * 10))
        .map_failure(|error| error);
    assert_eq!(result, Attempt::failure(CapturedError::msg("stale")));
}

#[rstest]
fn recover_turns_a_failure_into_a_new_attempt() {
    let failed: Attempt<i32> = Attempt::failure(CapturedError::msg("stale"));
    assert_eq!(failed.recover(|_| Attempt::success(1)), Attempt::success(1));

    let replaced: Attempt<i32> = Attempt::failure(CapturedError::msg("stale"))
        .recover(|error| Attempt::failure(CapturedError::msg(format!("retried: {error}"))));
    assert_eq!(
        replaced,
        Attempt::failure(CapturedError::msg("retried: stale"))
    );
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_or_else_falls_back_only_on_failure() {
    assert_eq!(Attempt::success(1).get_or_else(9), 1);
    assert_eq!(
        Attempt::failure(CapturedError::msg("x")).get_or_else(9),
        9
    );
}

#[rstest]
fn unwrap_success_returns_the_value() {
    assert_eq!(Attempt::success(42).unwrap_success(), 42);
}

#[rstest]
#[should_panic(expected = "bad record")]
fn unwrap_success_reraises_the_stored_error() {
    let failed: Attempt<i32> = Attempt::failure(CapturedError::msg("bad record"));
    let _ = failed.unwrap_success();
}

#[rstest]
fn into_result_exposes_both_tracks() {
    assert_eq!(Attempt::success(1).into_result(), Ok(1));
    let error = Attempt::<i32>::failure(CapturedError::msg("x"))
        .into_result()
        .unwrap_err();
    assert_eq!(error.to_string(), "x");
}

// =============================================================================
// Observers and Fold
// =============================================================================

#[rstest]
fn observers_fire_for_their_variant_only() {
    let mut failure_seen = None;

    let failed: Attempt<i32> = Attempt::failure(CapturedError::msg("boom"));
    let unchanged = failed
        .on_success(|_| unreachable!("failure must not trigger on_success"))
        .on_failure(|error| failure_seen = Some(error.to_string()));

    assert_eq!(failure_seen.as_deref(), Some("boom"));
    assert!(unchanged.is_failure());
}

#[rstest]
fn fold_dispatches_on_the_current_variant() {
    let rendered = Attempt::success(3).fold(AttemptCases {
        if_success: |n| format!("ok {n}"),
        if_failure: |error| format!("failed: {error}"),
    });
    assert_eq!(rendered, "ok 3");

    let rendered = Attempt::<i32>::failure(CapturedError::msg("boom")).fold(AttemptCases {
        if_success: |n| format!("ok {n}"),
        if_failure: |error| format!("failed: {error}"),
    });
    assert_eq!(rendered, "failed: boom");
}
