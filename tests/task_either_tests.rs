//! Unit tests for the TaskEither container.
//!
//! Tests cover:
//! - Eager start at construction (work runs without an observer)
//! - One-result/many-observers memoization
//! - Railway combinators over the pending disjunction
//! - The thenable contract (direct await)
//! - Timeout racing, including the documented non-cancellation

#![cfg(feature = "async")]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use railcar::control::{Either, EitherCases};
use railcar::effect::TaskEither;
use rstest::rstest;

// =============================================================================
// Eagerness
// =============================================================================

#[rstest]
#[tokio::test]
async fn construction_starts_the_work_without_an_observer() {
    let started = Arc::new(AtomicBool::new(false));
    let flag = started.clone();

    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async move {
        flag.store(true, Ordering::SeqCst);
        1
    });

    // Never awaited; give the spawned task a turn on the scheduler.
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;

    assert!(started.load(Ordering::SeqCst));
    drop(task);
}

#[rstest]
fn from_either_needs_no_runtime() {
    // Lifting a settled disjunction starts nothing; constructing outside
    // a runtime must not panic.
    let _task = TaskEither::from_either(Either::<String, i32>::right(1));
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
#[tokio::test]
async fn many_observers_one_execution() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();

    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async move {
        counter.fetch_add(1, Ordering::SeqCst);
        7
    });
    let second = task.clone();
    let third = task.clone();

    assert_eq!(task.await, Either::right(7));
    assert_eq!(second.await, Either::right(7));
    assert_eq!(third.await, Either::right(7));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[tokio::test]
async fn from_future_captures_rejection_into_the_failure_track() {
    let task: TaskEither<String, i32> = TaskEither::from_future(
        async { Err::<i32, &str>("connection refused") },
        |error| format!("fetch failed: {error}"),
    );
    assert_eq!(
        task.await,
        Either::left("fetch failed: connection refused".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn from_future_passes_success_through() {
    let task: TaskEither<String, i32> =
        TaskEither::from_future(async { Ok::<i32, String>(3) }, |error| error);
    assert_eq!(task.await, Either::right(3));
}

#[rstest]
#[tokio::test]
async fn from_safe_future_settles_on_the_success_track() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async { 21 });
    assert_eq!(task.await, Either::right(21));
}

// =============================================================================
// Railway Combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_transforms_the_eventual_success() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async { 21 });
    assert_eq!(task.map(|n| n * 2).await, Either::right(42));
}

#[rstest]
#[tokio::test]
async fn map_left_transforms_the_eventual_failure() {
    let task: TaskEither<String, i32> =
        TaskEither::from_either(Either::left("gone".to_string()));
    assert_eq!(
        task.map_left(|message| format!("{message}!")).await,
        Either::left("gone!".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn flat_map_waits_for_the_inner_task() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async { 4 });
    let chained = task.flat_map(|n| {
        TaskEither::from_safe_future(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            n * 10
        })
    });
    assert_eq!(chained.await, Either::right(40));
}

#[rstest]
#[tokio::test]
async fn flat_map_skips_the_transform_on_failure() {
    let task: TaskEither<String, i32> =
        TaskEither::from_either(Either::left("gone".to_string()));
    let chained = task.flat_map(|n| TaskEither::from_either(Either::right(n * 10)));
    assert_eq!(chained.await, Either::left("gone".to_string()));
}

#[rstest]
#[tokio::test]
async fn and_then_chains_into_the_synchronous_counterpart() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async { 8 });
    let chained = task.and_then(|n| {
        if n % 2 == 0 {
            Either::right(n / 2)
        } else {
            Either::left("odd".to_string())
        }
    });
    assert_eq!(chained.await, Either::right(4));
}

#[rstest]
#[tokio::test]
async fn or_else_recovers_into_the_synchronous_counterpart() {
    let task: TaskEither<String, i32> =
        TaskEither::from_either(Either::left("cache miss".to_string()));
    let recovered = task.or_else(|_| Either::<u8, i32>::right(0));
    assert_eq!(recovered.await, Either::right(0));
}

#[rstest]
#[tokio::test]
async fn flat_map_left_chains_on_the_failure_track() {
    let task: TaskEither<String, i32> =
        TaskEither::from_either(Either::left("primary down".to_string()));
    let failed_over = task.flat_map_left(|_| {
        TaskEither::<u8, i32>::from_safe_future(async { 7 })
    });
    assert_eq!(failed_over.await, Either::right(7));
}

// =============================================================================
// Fold and the Thenable Contract
// =============================================================================

#[rstest]
#[tokio::test]
async fn fold_dispatches_after_resolution() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async { 3 });
    let rendered = task
        .fold(EitherCases {
            if_right: |n| format!("= {n}"),
            if_left: |message| format!("! {message}"),
        })
        .await;
    assert_eq!(rendered, "= 3");
}

#[rstest]
#[tokio::test]
async fn awaiting_yields_the_settled_synchronous_disjunction() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async { 5 });
    let settled: Either<String, i32> = task.await;
    assert_eq!(settled.get_or_else(0), 5);
}

// =============================================================================
// Timeout Racing
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn a_slow_result_loses_the_race_to_the_timeout() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        1
    });

    let raced = task.with_timeout(Duration::from_millis(50), || "timed out".to_string());
    assert_eq!(raced.await, Either::left("timed out".to_string()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn a_fast_result_wins_the_race() {
    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        1
    });

    let raced = task.with_timeout(Duration::from_millis(50), || "timed out".to_string());
    assert_eq!(raced.await, Either::right(1));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn losing_the_race_does_not_cancel_the_original_work() {
    let completed = Arc::new(AtomicBool::new(false));
    let flag = completed.clone();

    let task: TaskEither<String, i32> = TaskEither::from_safe_future(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        flag.store(true, Ordering::SeqCst);
        1
    });
    let original = task.clone();

    let raced = task.with_timeout(Duration::from_millis(50), || "timed out".to_string());
    assert_eq!(raced.await, Either::left("timed out".to_string()));

    // The producer keeps running; an observer taken before the race
    // still settles with the real result, side effect included.
    assert_eq!(original.await, Either::right(1));
    assert!(completed.load(Ordering::SeqCst));
}
