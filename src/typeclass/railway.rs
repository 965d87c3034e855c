//! Railway type class - success/failure-track chaining.
//!
//! Railway-oriented programming pictures a computation as two parallel
//! tracks: values travel on the success track until an operation fails,
//! at which point they switch to the failure track and bypass every
//! remaining success-track operation unchanged.
//!
//! `Railway` layers that vocabulary over [`Foldable`]:
//!
//! - [`and_then`](Railway::and_then) chains on the success track
//! - [`or_else`](Railway::or_else) is the mirror on the failure track
//! - [`combine_with`](Railway::combine_with) zips a container with a
//!   sequence of same-typed containers, short-circuiting on the first
//!   failure in iteration order
//! - [`succeed`](Railway::succeed) / [`fail`](Railway::fail) construct
//!   either variant at any success type, which is what lets the default
//!   methods be written once for every kind
//!
//! For ordered *heterogeneous* combination (differently typed success
//! values into a tuple), use [`Applicative::map2`](super::Applicative::map2),
//! [`map3`](super::Applicative::map3), or
//! [`product`](super::Applicative::product); `combine_with` keeps the
//! sequence form homogeneous.
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::Railway;
//! use railcar::control::Either;
//!
//! let quorum: Either<String, Vec<i32>> =
//!     Either::right(1).combine_with([Either::right(2), Either::right(3)]);
//! assert_eq!(quorum, Either::right(vec![1, 2, 3]));
//!
//! let broken: Either<String, Vec<i32>> = Either::right(1)
//!     .combine_with([Either::left("offline".to_string()), Either::right(3)]);
//! assert_eq!(broken, Either::left("offline".to_string()));
//! ```

use super::foldable::Foldable;

/// A type class for success/failure-track chaining over any two-variant
/// container.
///
/// # Short-circuit guarantee
///
/// Once a container holds its failure variant, `and_then` (and every
/// combinator built on it) returns a failure holding the *original*
/// payload unchanged, regardless of the transform supplied.
pub trait Railway: Foldable + Sized {
    /// Constructs the success variant of this kind at an arbitrary
    /// success type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Railway;
    /// use railcar::control::Maybe;
    ///
    /// let value: Maybe<&str> = <Maybe<i32>>::succeed("hi");
    /// assert_eq!(value, Maybe::just("hi"));
    /// ```
    fn succeed<B>(value: B) -> Self::WithType<B>;

    /// Constructs the failure variant of this kind at an arbitrary
    /// success type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Railway;
    /// use railcar::control::Either;
    ///
    /// let value: Either<String, i32> = <Either<String, ()>>::fail("no".to_string());
    /// assert_eq!(value, Either::left("no".to_string()));
    /// ```
    fn fail<B>(failure: Self::Failure) -> Self::WithType<B>;

    /// Applies `transform` to the success payload, producing a new
    /// container of the same failure type; a failure variant propagates
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Railway;
    /// use railcar::control::Either;
    ///
    /// let value: Either<String, i32> = Either::right(2);
    /// assert_eq!(value.and_then(|n| Either::right(n * 2)), Either::right(4));
    /// ```
    #[inline]
    fn and_then<B, F>(self, transform: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.fold_cases(transform, Self::fail::<B>)
    }

    /// The mirror of [`and_then`](Railway::and_then): applies `transform`
    /// to the failure payload, leaving a success variant untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Railway;
    /// use railcar::control::Either;
    ///
    /// let failed: Either<String, i32> = Either::left("gone".to_string());
    /// assert_eq!(failed.or_else(|_| Either::right(0)), Either::right(0));
    /// ```
    fn or_else<F>(self, transform: F) -> Self
    where
        F: FnOnce(Self::Failure) -> Self;

    /// Zips this container's success value with the success values of a
    /// sequence of containers of the same type, in order.
    ///
    /// Returns the first encountered failure in iteration order — this
    /// container's own failure takes precedence over any failure among
    /// `others` — without inspecting subsequent elements. If every
    /// container succeeds, the result holds all success values in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Railway;
    /// use railcar::control::Either;
    ///
    /// let all: Either<String, Vec<i32>> =
    ///     Either::right(1).combine_with([Either::right(2), Either::right(3)]);
    /// assert_eq!(all, Either::right(vec![1, 2, 3]));
    /// ```
    fn combine_with<I>(self, others: I) -> Self::WithType<Vec<Self::Inner>>
    where
        I: IntoIterator<Item = Self>,
    {
        match self.fold_cases(Ok, Err) {
            Err(failure) => Self::fail::<Vec<Self::Inner>>(failure),
            Ok(first) => {
                let mut values = vec![first];
                for other in others {
                    match other.fold_cases(Ok, Err) {
                        Ok(value) => values.push(value),
                        Err(failure) => return Self::fail::<Vec<Self::Inner>>(failure),
                    }
                }
                Self::succeed(values)
            }
        }
    }
}
