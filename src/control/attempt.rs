//! Attempt type - the outcome of a computation that may panic.
//!
//! This module provides the `Attempt<A>` type: a disjunction specialized
//! so the failure payload is always a proper error object
//! ([`CapturedError`]). [`Attempt::execute`] invokes a computation and
//! captures any panic at the boundary, normalizing the payload so the
//! failure track carries a uniform error type.
//!
//! [`Attempt::unwrap_success`] is the single sanctioned point where an
//! in-band failure becomes an out-of-band panic again; everywhere else
//! the failure travels as a value.
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::{Attempt, AttemptCases, CapturedError};
//!
//! let outcome = Attempt::execute(|| "21".parse::<i32>().unwrap() * 2);
//! assert_eq!(outcome, Attempt::success(42));
//!
//! let failed: Attempt<i32> = Attempt::execute(|| panic!("bad record"));
//! let rendered = failed.fold(AttemptCases {
//!     if_success: |n: i32| n.to_string(),
//!     if_failure: |error: CapturedError| format!("failed: {error}"),
//! });
//! assert_eq!(rendered, "failed: bad record");
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::typeclass::{Applicative, Foldable, Functor, Monad, Railway, TypeConstructor};

use super::error::CapturedError;

/// The outcome of invoking a computation that may panic.
///
/// `Attempt<A>` is a closed two-variant sum: `Success(A)` or
/// `Failure(CapturedError)`. Instances are immutable; every combinator
/// returns a new value. The failure payload is always a proper error
/// object — non-message panic payloads are normalized at the
/// [`execute`](Attempt::execute) boundary.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Attempt;
///
/// let doubled = Attempt::success(21).map(|n| n * 2);
/// assert_eq!(doubled.get_or_else(0), 42);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Attempt<A> {
    /// The success variant, holding the computed value.
    Success(A),
    /// The failure variant, holding the captured error.
    Failure(CapturedError),
}

/// Exhaustive case map for [`Attempt::fold`].
///
/// Exactly one handler runs, matching the current variant.
pub struct AttemptCases<SF, FF> {
    /// Handler for the `Success` variant; receives the value.
    pub if_success: SF,
    /// Handler for the `Failure` variant; receives the captured error.
    pub if_failure: FF,
}

impl<A> Attempt<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Invokes `computation` and captures any panic into the failure
    /// variant.
    ///
    /// The panic payload is normalized by
    /// [`CapturedError::from_panic`]: a message panic keeps its message,
    /// any other payload becomes the fixed "Unknown error".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Attempt;
    ///
    /// let parsed = Attempt::execute(|| "7".parse::<i32>().unwrap());
    /// assert_eq!(parsed, Attempt::success(7));
    /// ```
    pub fn execute<F>(computation: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(CapturedError::from_panic(payload)),
        }
    }

    /// Constructs the success variant directly.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Constructs the failure variant directly.
    #[inline]
    pub const fn failure(error: CapturedError) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving a failure
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Attempt;
    ///
    /// assert_eq!(Attempt::success(2).map(|n| n + 1), Attempt::success(3));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Attempt::Success(function(value)),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Applies a function to the captured error, leaving a success
    /// untouched.
    #[inline]
    pub fn map_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(CapturedError) -> CapturedError,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(function(error)),
        }
    }

    /// Chains into another `Attempt` on the success track; a failure
    /// propagates with its error unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Attempt;
    ///
    /// let chained = Attempt::success("5")
    ///     .flat_map(|text| Attempt::execute(|| text.parse::<i32>().unwrap()));
    /// assert_eq!(chained, Attempt::success(5));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> Attempt<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Alias for [`flat_map`](Attempt::flat_map), matching Rust's naming
    /// conventions.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> Attempt<B>,
    {
        self.flat_map(function)
    }

    /// Turns a failure into a new `Attempt`; the retry-with-fallback
    /// operation. A success propagates untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Attempt, CapturedError};
    ///
    /// let failed: Attempt<i32> = Attempt::failure(CapturedError::msg("stale"));
    /// assert_eq!(failed.recover(|_| Attempt::success(1)), Attempt::success(1));
    /// ```
    #[inline]
    pub fn recover<F>(self, transform: F) -> Self
    where
        F: FnOnce(CapturedError) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => transform(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, consuming the attempt.
    ///
    /// This is the single point where an in-band failure becomes an
    /// out-of-band panic again.
    ///
    /// # Panics
    ///
    /// Panics with the stored error's rendering if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Attempt;
    ///
    /// assert_eq!(Attempt::success(42).unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{error}"),
        }
    }

    /// Converts into a `Result`, consuming the attempt.
    #[inline]
    pub fn into_result(self) -> Result<A, CapturedError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Runs `action` on a reference to the success value; returns the
    /// container unchanged.
    #[inline]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on a reference to the captured error; returns the
    /// container unchanged.
    #[inline]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&CapturedError),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Attempt` by dispatching to exactly one handler of
    /// the case map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Attempt, AttemptCases, CapturedError};
    ///
    /// let label = Attempt::success(3).fold(AttemptCases {
    ///     if_success: |n: i32| format!("ok {n}"),
    ///     if_failure: |error: CapturedError| error.to_string(),
    /// });
    /// assert_eq!(label, "ok 3");
    /// ```
    #[inline]
    pub fn fold<T, SF, FF>(self, cases: AttemptCases<SF, FF>) -> T
    where
        SF: FnOnce(A) -> T,
        FF: FnOnce(CapturedError) -> T,
    {
        match self {
            Self::Success(value) => (cases.if_success)(value),
            Self::Failure(error) => (cases.if_failure)(error),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Attempt<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A> TypeConstructor for Attempt<A> {
    type Inner = A;
    type WithType<B> = Attempt<B>;
}

impl<A> Functor for Attempt<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Attempt<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Success(value) => Attempt::Success(function(value)),
            Self::Failure(error) => Attempt::Failure(error.clone()),
        }
    }
}

impl<A> Applicative for Attempt<A> {
    #[inline]
    fn pure<B>(value: B) -> Attempt<B> {
        Attempt::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Attempt<B>, function: F) -> Attempt<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match self {
            Self::Failure(error) => Attempt::Failure(error),
            Self::Success(first) => match other {
                Attempt::Failure(error) => Attempt::Failure(error),
                Attempt::Success(second) => Attempt::Success(function(first, second)),
            },
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Attempt<B>, third: Attempt<C>, function: F) -> Attempt<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }
}

impl<A> Monad for Attempt<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(A) -> Attempt<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Attempt::Failure(error),
        }
    }
}

impl<A> Foldable for Attempt<A> {
    type Failure = CapturedError;

    #[inline]
    fn fold_cases<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(A) -> T,
        F: FnOnce(CapturedError) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<A> Railway for Attempt<A> {
    #[inline]
    fn succeed<B>(value: B) -> Attempt<B> {
        Attempt::Success(value)
    }

    #[inline]
    fn fail<B>(failure: CapturedError) -> Attempt<B> {
        Attempt::Failure(failure)
    }

    #[inline]
    fn or_else<F>(self, transform: F) -> Self
    where
        F: FnOnce(CapturedError) -> Self,
    {
        self.recover(transform)
    }
}
