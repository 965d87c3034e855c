//! Monad type class - sequencing dependent computations.
//!
//! This module provides the `Monad` trait, which extends
//! [`Applicative`](super::Applicative) with `flat_map`: the result of one
//! computation chooses the next computation. On the failure track,
//! `flat_map` is a no-op that propagates the failure payload unchanged —
//! this is what makes railway-style pipelines short-circuit.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::Monad;
//! use railcar::control::Maybe;
//!
//! let half = |n: i32| {
//!     if n % 2 == 0 {
//!         Maybe::just(n / 2)
//!     } else {
//!         Maybe::nothing()
//!     }
//! };
//!
//! assert_eq!(Maybe::just(8).flat_map(half), Maybe::just(4));
//! assert_eq!(Maybe::just(5).flat_map(half), Maybe::nothing());
//! ```

use super::applicative::Applicative;

/// A type class for containers that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the success value and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind). A container on the failure track
    /// is returned as-is with its payload untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Monad;
    /// use railcar::control::Either;
    ///
    /// let success: Either<String, i32> = Either::right(5);
    /// let chained = success.flat_map(|n| Either::right(n * 2));
    /// assert_eq!(chained, Either::right(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// Provided for familiarity with `Option::and_then` and
    /// `Result::and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Monad;
    /// use railcar::control::Maybe;
    ///
    /// let value = Maybe::just(5).and_then(|n| Maybe::just(n + 1));
    /// assert_eq!(value, Maybe::just(6));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first success value.
    ///
    /// If `self` is on the failure track, the failure propagates and
    /// `next` is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Monad;
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).then(Maybe::just("hello")), Maybe::just("hello"));
    /// assert_eq!(Maybe::<i32>::nothing().then(Maybe::just("hello")), Maybe::nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
