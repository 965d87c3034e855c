//! Tests for cross-kind conversions and future lifting.
//!
//! Conversions are lossy in one direction only: widening preserves the
//! success value, narrowing synthesizes the documented failure payload.

#![cfg(feature = "control")]

use railcar::control::{Attempt, CapturedError, Either, Maybe};
use rstest::rstest;

// =============================================================================
// Lossy-Aware Round Trips
// =============================================================================

#[rstest]
fn either_right_widens_into_maybe() {
    assert_eq!(
        Maybe::from_foldable(Either::<String, i32>::right(5)),
        Maybe::of(Some(5))
    );
}

#[rstest]
fn absent_maybe_narrows_into_unit_left() {
    let either: Either<(), i32> = Maybe::of(None).into();
    assert_eq!(either, Either::left(()));
}

#[rstest]
fn present_maybe_narrows_into_right() {
    let either: Either<(), i32> = Maybe::of(Some(3)).into();
    assert_eq!(either, Either::right(3));
}

#[rstest]
fn maybe_round_trips_through_either() {
    let original = Maybe::just(5);
    let widened: Either<(), i32> = original.into();
    assert_eq!(Maybe::from(widened), original);
}

#[rstest]
fn left_payload_is_discarded_by_maybe() {
    let absent = Maybe::from(Either::<String, i32>::left("reason".to_string()));
    assert_eq!(absent, Maybe::nothing());
}

// =============================================================================
// Error Normalization per Pair
// =============================================================================

#[rstest]
fn absent_maybe_becomes_the_fixed_no_value_error() {
    let attempt: Attempt<i32> = Maybe::of(None).into();
    assert_eq!(
        attempt.into_result().unwrap_err().to_string(),
        "No value"
    );
}

#[rstest]
fn left_payload_is_wrapped_via_display() {
    let attempt: Attempt<i32> = Either::<String, i32>::left("offline".to_string()).into();
    assert_eq!(attempt, Attempt::failure(CapturedError::msg("offline")));
}

#[rstest]
fn attempt_failure_widens_losslessly_into_either() {
    let error = CapturedError::msg("boom");
    let either: Either<CapturedError, i32> = Attempt::failure(error.clone()).into();
    assert_eq!(either, Either::left(error));
}

#[rstest]
fn attempt_error_is_discarded_by_maybe() {
    let absent: Maybe<i32> = Attempt::failure(CapturedError::msg("boom")).into();
    assert_eq!(absent, Maybe::nothing());
}

#[rstest]
fn from_foldable_is_the_generic_funnel() {
    let attempted = Attempt::from_foldable(Either::<String, i32>::right(9));
    assert_eq!(attempted, Attempt::success(9));

    let either = Either::from_foldable(Attempt::success(9));
    assert_eq!(either, Either::<CapturedError, i32>::right(9));
}

// =============================================================================
// Catch Normalization
// =============================================================================

#[rstest]
fn catch_preserves_an_error_message() {
    let failure: Either<CapturedError, i32> = Either::catch(|| panic!("x"));
    assert_eq!(failure, Either::left(CapturedError::msg("x")));
}

#[rstest]
fn catch_normalizes_a_raw_payload_to_unknown_error() {
    let failure: Either<CapturedError, i32> =
        Either::catch(|| std::panic::panic_any(vec!["raw"]));
    assert_eq!(failure, Either::left(CapturedError::msg("Unknown error")));
}

// =============================================================================
// Future Lifting
// =============================================================================

#[cfg(feature = "async")]
mod futurizable {
    use super::*;
    use railcar::typeclass::Futurizable;

    #[rstest]
    #[tokio::test]
    async fn success_payload_resolves() {
        assert_eq!(Maybe::just(42).to_future().await.unwrap(), 42);
        assert_eq!(
            Attempt::success("ok").to_future().await.unwrap(),
            "ok"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn absence_rejects_with_the_fixed_message() {
        let rejected = Maybe::<i32>::nothing().to_future().await;
        assert_eq!(rejected.unwrap_err().to_string(), "No value");
    }

    #[rstest]
    #[tokio::test]
    async fn left_payload_rejects_via_its_display_rendering() {
        let value: Either<u16, &str> = Either::left(503);
        let rejected = value.to_future().await;
        assert_eq!(rejected.unwrap_err().to_string(), "503");
    }

    #[rstest]
    #[tokio::test]
    async fn captured_error_rejects_unchanged() {
        let value: Attempt<i32> = Attempt::failure(CapturedError::msg("broken"));
        let rejected = value.to_future().await;
        assert_eq!(rejected.unwrap_err(), CapturedError::msg("broken"));
    }
}
