//! Either type - a value on one of two tracks.
//!
//! This module provides the `Either<L, R>` type, a closed two-variant
//! disjunction. By railway convention `Right` is the success track and
//! `Left` the failure track, and the failure payload is an arbitrary
//! application type — it does not have to be an error. When the failure
//! must be a proper error object, use [`Attempt`](super::Attempt).
//!
//! Success-track combinators (`map`, `flat_map`) propagate a `Left`
//! unchanged; only the failure-track operations (`map_left`,
//! `flat_map_left`, `recover`) may touch it.
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::{Either, EitherCases};
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Either<String, i32> {
//!     if divisor == 0 {
//!         Either::left("division by zero".to_string())
//!     } else {
//!         Either::right(dividend / divisor)
//!     }
//! }
//!
//! let result = checked_div(10, 2)
//!     .map(|n| n * 3)
//!     .flat_map(|n| checked_div(n, 5));
//! assert_eq!(result, Either::right(3));
//!
//! let rendered = checked_div(1, 0).fold(EitherCases {
//!     if_right: |n| format!("= {n}"),
//!     if_left: |message| format!("! {message}"),
//! });
//! assert_eq!(rendered, "! division by zero");
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::typeclass::{Applicative, Foldable, Functor, Monad, Railway, TypeConstructor};

use super::error::CapturedError;

/// A value on one of two tracks.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or
/// `Right(R)`. By convention:
/// - `Right` is the success track
/// - `Left` is the failure track, with an arbitrary payload type
///
/// Instances are immutable; every combinator returns a new value.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// assert_eq!(success.map(|n| n * 2), Either::right(84));
///
/// let failure: Either<String, i32> = Either::left("error".to_string());
/// assert_eq!(failure.map(|n| n * 2), Either::left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure track, holding an arbitrary payload.
    Left(L),
    /// The success track.
    Right(R),
}

/// Exhaustive case map for [`Either::fold`].
///
/// Exactly one handler runs, matching the current variant.
pub struct EitherCases<RF, LF> {
    /// Handler for the `Right` variant; receives the success payload.
    pub if_right: RF,
    /// Handler for the `Left` variant; receives the failure payload.
    pub if_left: LF,
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Constructs the success track.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Constructs the failure track.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::left(42);
    /// assert_eq!(failure.left_value(), Some(42));
    /// ```
    #[inline]
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, consuming the either.
    #[inline]
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left payload if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right payload if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the success payload, or `default` on the failure track.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::left("gone".to_string());
    /// assert_eq!(failure.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload, leaving a `Left`
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let success: Either<String, i32> = Either::right(21);
    /// assert_eq!(success.map(|n| n * 2), Either::right(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the failure payload, leaving a `Right`
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::left(42);
    /// assert_eq!(failure.map_left(|n| n * 2), Either::left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the track.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let success: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(success.bimap(|n: i32| n * 2, |s| s.len()), Either::right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains into another `Either` on the success track; a `Left`
    /// propagates with its payload unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let success: Either<String, i32> = Either::right(4);
    /// let chained = success.flat_map(|n| {
    ///     if n % 2 == 0 {
    ///         Either::right(n / 2)
    ///     } else {
    ///         Either::left("odd".to_string())
    ///     }
    /// });
    /// assert_eq!(chained, Either::right(2));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`flat_map`](Either::flat_map), matching Rust's naming
    /// conventions.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Chains into another `Either` on the failure track; a `Right`
    /// propagates untouched. The resulting failure type may differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::left("primary down".to_string());
    /// let fallback: Either<u8, i32> = failure.flat_map_left(|_| Either::right(7));
    /// assert_eq!(fallback, Either::right(7));
    /// ```
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Turns a failure into a (possibly different) disjunction; the
    /// retry-with-fallback operation.
    ///
    /// Behaves exactly like [`flat_map_left`](Either::flat_map_left);
    /// the name states the intent at call sites that supply a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::left("cache miss".to_string());
    /// let recovered: Either<String, i32> = failure.recover(|_| Either::right(0));
    /// assert_eq!(recovered, Either::right(0));
    /// ```
    #[inline]
    pub fn recover<T, F>(self, transform: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        self.flat_map_left(transform)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Runs `action` on a reference to the success payload; returns the
    /// container unchanged.
    #[inline]
    pub fn on_right<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on a reference to the failure payload; returns the
    /// container unchanged.
    #[inline]
    pub fn on_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by dispatching to exactly one handler of
    /// the case map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Either, EitherCases};
    ///
    /// let value: Either<i32, String> = Either::right("hello".to_string());
    /// let result = value.fold(EitherCases {
    ///     if_right: |s: String| s,
    ///     if_left: |n: i32| n.to_string(),
    /// });
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, RF, LF>(self, cases: EitherCases<RF, LF>) -> T
    where
        RF: FnOnce(R) -> T,
        LF: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => (cases.if_left)(value),
            Self::Right(value) => (cases.if_right)(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the tracks: `Left(l)` becomes `Right(l)` and `Right(r)`
    /// becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::left(42);
    /// assert_eq!(failure.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<R> Either<CapturedError, R> {
    /// Invokes `computation` and converts any panic into the failure
    /// track.
    ///
    /// The panic payload is normalized: `panic!` with a message keeps the
    /// message, any other payload becomes the fixed "Unknown error" (see
    /// [`CapturedError::from_panic`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{CapturedError, Either};
    ///
    /// let success = Either::catch(|| 21 * 2);
    /// assert_eq!(success, Either::right(42));
    ///
    /// let failure = Either::catch(|| -> i32 { panic!("bad input") });
    /// assert_eq!(failure, Either::left(CapturedError::msg("bad input")));
    /// ```
    pub fn catch<F>(computation: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Right(value),
            Err(payload) => Self::Left(CapturedError::from_panic(payload)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

// The failure payload must be duplicable for `fmap_ref` to build a new
// container without consuming this one; hence `L: Clone` on the impl.
impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(first) => match other {
                Either::Left(value) => Either::Left(value),
                Either::Right(second) => Either::Right(function(first, second)),
            },
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    type Failure = L;

    #[inline]
    fn fold_cases<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(R) -> T,
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => on_failure(value),
            Self::Right(value) => on_success(value),
        }
    }
}

impl<L, R> Railway for Either<L, R> {
    #[inline]
    fn succeed<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn fail<B>(failure: L) -> Either<L, B> {
        Either::Left(failure)
    }

    #[inline]
    fn or_else<F>(self, transform: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match self {
            Self::Left(value) => transform(value),
            right => right,
        }
    }
}
