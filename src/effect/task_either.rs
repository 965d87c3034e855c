//! `TaskEither` - the asynchronous disjunction.
//!
//! `TaskEither<L, R>` wraps a single pending [`Either<L, R>`]: work that
//! is running now and will settle on exactly one track. It supports the
//! same combinator vocabulary as the synchronous disjunction, plus
//! timeout racing, and can be awaited directly.
//!
//! # Eager by construction
//!
//! **The wrapped work begins executing immediately upon construction.**
//! Unlike [`Effect`](super::Effect), which defers everything until
//! `run()`, the asynchronous primitive underneath this container is a
//! spawned task — it runs whether or not anyone awaits it. Chaining
//! combinators after construction does not delay that initial work, only
//! the downstream transformation. This asymmetry is intentional; see the
//! [module documentation](super) for the full discussion.
//!
//! Consequently, every constructor that accepts work (and every
//! combinator) must be called from within a tokio runtime.
//! [`from_either`](TaskEither::from_either) is the exception: lifting an
//! already-settled disjunction starts nothing and needs no runtime.
//!
//! # One result, many observers
//!
//! The pending result is created once and memoized. Cloning the
//! container yields another observer of the *same* work; awaiting twice
//! never re-runs anything.
//!
//! # Timeouts do not cancel
//!
//! [`with_timeout`](TaskEither::with_timeout) races the pending result
//! against a clock. Losing the race stops the *waiting*, not the *work*:
//! the original task keeps running to completion and its side effects
//! still occur. The timeout is advisory to the caller, not destructive
//! to the producer.
//!
//! # Examples
//!
//! ```rust,ignore
//! use railcar::effect::TaskEither;
//! use railcar::control::Either;
//!
//! #[tokio::main]
//! async fn main() {
//!     let task: TaskEither<String, i32> =
//!         TaskEither::from_safe_future(async { 21 });
//!
//!     let settled = task.map(|n| n * 2).await;
//!     assert_eq!(settled, Either::right(42));
//! }
//! ```

use std::future::Future;
use std::panic::resume_unwind;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use pin_project_lite::pin_project;

use crate::control::{Either, EitherCases};
use crate::typeclass::TypeConstructor;

pin_project! {
    /// A pending asynchronous disjunction.
    ///
    /// `TaskEither<L, R>` wraps work that settles to exactly one
    /// [`Either<L, R>`]. The work starts at construction (see the
    /// [module documentation](self) on eagerness), is memoized, and may
    /// be observed by any number of clones.
    ///
    /// Awaiting the container yields the settled synchronous
    /// disjunction — `TaskEither` implements [`Future`] directly, so it
    /// drops into any async pipeline.
    ///
    /// # Payload bounds
    ///
    /// Both payloads must be `Clone + Send + Sync + 'static`: the settled
    /// value is handed to every observer by clone, potentially from
    /// another task.
    pub struct TaskEither<L, R> {
        #[pin]
        inner: Shared<BoxFuture<'static, Either<L, R>>>,
    }
}

impl<L, R> TaskEither<L, R>
where
    L: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Starts `work` now and wraps its eventual disjunction.
    ///
    /// This is the primitive constructor: the future is spawned onto the
    /// current runtime immediately. A panic inside `work` is not a
    /// failure value — it resumes on whichever observer awaits the
    /// container (rejections are the `Err` branch of
    /// [`from_future`](TaskEither::from_future)).
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<Fut>(work: Fut) -> Self
    where
        Fut: Future<Output = Either<L, R>> + Send + 'static,
    {
        let handle = tokio::spawn(work);
        let settled = async move {
            match handle.await {
                Ok(either) => either,
                Err(error) if error.is_panic() => resume_unwind(error.into_panic()),
                Err(error) => panic!("task vanished before settling: {error}"),
            }
        };
        Self {
            inner: settled.boxed().shared(),
        }
    }

    /// Starts a fallible future now, capturing its `Err` into the
    /// failure track via `on_error`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task: TaskEither<String, Response> = TaskEither::from_future(
    ///     client.fetch(url),
    ///     |error| format!("fetch failed: {error}"),
    /// );
    /// ```
    pub fn from_future<Fut, E, F>(pending: Fut, on_error: F) -> Self
    where
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        E: Send + 'static,
        F: FnOnce(E) -> L + Send + 'static,
    {
        Self::spawn(async move {
            match pending.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(on_error(error)),
            }
        })
    }

    /// Starts a future that cannot fail now; it settles on the success
    /// track.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn from_safe_future<Fut>(pending: Fut) -> Self
    where
        Fut: Future<Output = R> + Send + 'static,
    {
        Self::spawn(async move { Either::Right(pending.await) })
    }

    /// Lifts an already-settled synchronous disjunction.
    ///
    /// Nothing is started, so no runtime is required.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task = TaskEither::from_either(Either::<String, i32>::right(7));
    /// assert_eq!(task.await, Either::right(7));
    /// ```
    pub fn from_either(either: Either<L, R>) -> Self {
        Self {
            inner: futures::future::ready(either).boxed().shared(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `transform` to the eventual success payload; a failure
    /// settles unchanged.
    ///
    /// The continuation is scheduled immediately; it waits only for the
    /// upstream result.
    pub fn map<T, F>(self, transform: F) -> TaskEither<L, T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(R) -> T + Send + 'static,
    {
        TaskEither::spawn(async move { self.await.map(transform) })
    }

    /// Applies `transform` to the eventual failure payload; a success
    /// settles unchanged.
    pub fn map_left<T, F>(self, transform: F) -> TaskEither<T, R>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(L) -> T + Send + 'static,
    {
        TaskEither::spawn(async move { self.await.map_left(transform) })
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains into another `TaskEither` on the success track, waiting
    /// for the inner result before continuing; a failure settles
    /// unchanged.
    pub fn flat_map<T, F>(self, transform: F) -> TaskEither<L, T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(R) -> TaskEither<L, T> + Send + 'static,
    {
        TaskEither::spawn(async move {
            match self.await {
                Either::Right(value) => transform(value).await,
                Either::Left(failure) => Either::Left(failure),
            }
        })
    }

    /// Chains into another `TaskEither` on the failure track; a success
    /// settles unchanged.
    pub fn flat_map_left<T, F>(self, transform: F) -> TaskEither<T, R>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(L) -> TaskEither<T, R> + Send + 'static,
    {
        TaskEither::spawn(async move {
            match self.await {
                Either::Right(value) => Either::Right(value),
                Either::Left(failure) => transform(failure).await,
            }
        })
    }

    /// Chains into the synchronous counterpart on the success track.
    pub fn and_then<T, F>(self, transform: F) -> TaskEither<L, T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(R) -> Either<L, T> + Send + 'static,
    {
        TaskEither::spawn(async move { self.await.flat_map(transform) })
    }

    /// Chains into the synchronous counterpart on the failure track.
    pub fn or_else<T, F>(self, transform: F) -> TaskEither<T, R>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(L) -> Either<T, R> + Send + 'static,
    {
        TaskEither::spawn(async move { self.await.flat_map_left(transform) })
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Resolves the pending result and dispatches exhaustively to
    /// exactly one handler of the case map.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let label = task
    ///     .fold(EitherCases {
    ///         if_right: |n| format!("= {n}"),
    ///         if_left: |error| format!("! {error}"),
    ///     })
    ///     .await;
    /// ```
    pub async fn fold<T, RF, LF>(self, cases: EitherCases<RF, LF>) -> T
    where
        RF: FnOnce(R) -> T,
        LF: FnOnce(L) -> T,
    {
        self.await.fold(cases)
    }

    // =========================================================================
    // Timeout Racing
    // =========================================================================

    /// Races the pending result against a clock: the new container
    /// settles to whichever completes first — the original result, or a
    /// failure manufactured by `on_timeout` after `limit` elapses.
    ///
    /// **This does not cancel the original work.** The underlying task
    /// keeps running to completion and its side effects still occur;
    /// only this observer stops waiting. A clone taken before the race
    /// still settles with the real result.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_timeout<F>(self, limit: Duration, on_timeout: F) -> Self
    where
        F: FnOnce() -> L + Send + 'static,
    {
        Self::spawn(async move {
            match tokio::time::timeout(limit, self).await {
                Ok(settled) => settled,
                Err(_) => Either::Left(on_timeout()),
            }
        })
    }
}

// =============================================================================
// Observer Semantics
// =============================================================================

impl<L, R> Clone for TaskEither<L, R> {
    /// Another observer of the same pending work; nothing re-runs.
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// The thenable contract: awaiting yields the settled synchronous
/// disjunction.
impl<L: Clone, R: Clone> Future for TaskEither<L, R> {
    type Output = Either<L, R>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context)
    }
}

impl<L, R> TypeConstructor for TaskEither<L, R> {
    type Inner = R;
    type WithType<B> = TaskEither<L, B>;
}

// The settled payload is observed from multiple handles, possibly on
// other tasks; losing any of these would be an API break.
static_assertions::assert_impl_all!(
    TaskEither<String, i32>: Clone, Send, Sync, Unpin, Future
);
