//! Cross-kind conversions between containers.
//!
//! Any [`Foldable`] can be rebuilt as another container kind by funneling
//! its success payload into the target's success constructor and its
//! failure payload into the target's failure constructor. Conversion is
//! lossy in one direction only: narrowing a richer failure payload
//! (arbitrary `L`) into a poorer one (an error, or nothing at all)
//! discards information. The exact normalization rule is documented on
//! every impl:
//!
//! | From | To | Failure normalization |
//! |---|---|---|
//! | `Either<L, R>` | `Maybe<R>` | left payload discarded |
//! | `Attempt<A>` | `Maybe<A>` | error discarded |
//! | `Maybe<R>` | `Either<(), R>` | absence becomes the unit payload |
//! | `Maybe<A>` | `Attempt<A>` | absence becomes the fixed "No value" error |
//! | `Either<L, R>` | `Attempt<R>` | left payload wrapped via its `Display` rendering |
//! | `Attempt<A>` | `Either<CapturedError, A>` | lossless |
//!
//! The `from_foldable` constructors are the kind-generic form; the `From`
//! impls cover the concrete pairs (plus the std `Option`/`Result`
//! boundary).
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::{Attempt, Either, Maybe};
//!
//! // Widening keeps the value
//! assert_eq!(Maybe::from_foldable(Either::<String, i32>::right(5)), Maybe::just(5));
//!
//! // Narrowing synthesizes the documented payload
//! let absent: Either<(), i32> = Maybe::of(None).into();
//! assert_eq!(absent, Either::left(()));
//!
//! let failed: Attempt<i32> = Maybe::of(None).into();
//! assert_eq!(failed.into_result().unwrap_err().to_string(), "No value");
//! ```

use std::fmt;

use crate::typeclass::Foldable;

use super::attempt::Attempt;
use super::either::Either;
use super::error::CapturedError;
use super::maybe::Maybe;

// =============================================================================
// Kind-Generic Constructors
// =============================================================================

impl<A> Maybe<A> {
    /// Rebuilds any [`Foldable`] as a `Maybe`, discarding the failure
    /// payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Either, Maybe};
    ///
    /// let present = Maybe::from_foldable(Either::<String, i32>::right(5));
    /// assert_eq!(present, Maybe::of(Some(5)));
    ///
    /// let absent = Maybe::from_foldable(Either::<String, i32>::left("gone".to_string()));
    /// assert_eq!(absent, Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_foldable<F>(foldable: F) -> Self
    where
        F: Foldable<Inner = A>,
    {
        foldable.fold_cases(Self::Just, |_| Self::Nothing)
    }
}

impl<L, R> Either<L, R> {
    /// Rebuilds any [`Foldable`] with a matching failure type as an
    /// `Either`, preserving both payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Attempt, CapturedError, Either};
    ///
    /// let failed: Attempt<i32> = Attempt::failure(CapturedError::msg("boom"));
    /// let either = Either::from_foldable(failed);
    /// assert_eq!(either, Either::left(CapturedError::msg("boom")));
    /// ```
    #[inline]
    pub fn from_foldable<F>(foldable: F) -> Self
    where
        F: Foldable<Inner = R, Failure = L>,
    {
        foldable.fold_cases(Self::Right, Self::Left)
    }
}

impl<A> Attempt<A> {
    /// Rebuilds any [`Foldable`] as an `Attempt`, wrapping a failure
    /// payload that is not already an error via its `Display` rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Attempt, Either};
    ///
    /// let failed = Attempt::from_foldable(Either::<String, i32>::left("offline".to_string()));
    /// assert_eq!(failed.into_result().unwrap_err().to_string(), "offline");
    /// ```
    #[inline]
    pub fn from_foldable<F>(foldable: F) -> Self
    where
        F: Foldable<Inner = A>,
        F::Failure: fmt::Display,
    {
        foldable.fold_cases(Self::Success, |failure| {
            Self::Failure(CapturedError::msg(failure.to_string()))
        })
    }
}

// =============================================================================
// Std Boundary
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// `Some` becomes `Just`, `None` becomes `Nothing`.
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::of(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// `Just` becomes `Some`, `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<A> From<Result<A, CapturedError>> for Attempt<A> {
    /// `Ok` becomes `Success`, `Err` becomes `Failure`.
    #[inline]
    fn from(result: Result<A, CapturedError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A> From<Attempt<A>> for Result<A, CapturedError> {
    /// `Success` becomes `Ok`, `Failure` becomes `Err`.
    #[inline]
    fn from(attempt: Attempt<A>) -> Self {
        attempt.into_result()
    }
}

// =============================================================================
// Cross-Kind Pairs
// =============================================================================

impl<L, R> From<Either<L, R>> for Maybe<R> {
    /// Lossy: the left payload is discarded.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        Self::from_foldable(either)
    }
}

impl<A> From<Attempt<A>> for Maybe<A> {
    /// Lossy: the captured error is discarded.
    #[inline]
    fn from(attempt: Attempt<A>) -> Self {
        Self::from_foldable(attempt)
    }
}

impl<R> From<Maybe<R>> for Either<(), R> {
    /// Absence carries no payload, so the left payload is unit.
    #[inline]
    fn from(maybe: Maybe<R>) -> Self {
        Self::from_foldable(maybe)
    }
}

impl<A> From<Maybe<A>> for Attempt<A> {
    /// Absence becomes the fixed "No value" error
    /// ([`CapturedError::absent`]).
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Self::Success(value),
            Maybe::Nothing => Self::Failure(CapturedError::absent()),
        }
    }
}

impl<L: fmt::Display, R> From<Either<L, R>> for Attempt<R> {
    /// Lossy: the left payload is wrapped via its `Display` rendering;
    /// any richer structure on `L` is discarded.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        Self::from_foldable(either)
    }
}

impl<A> From<Attempt<A>> for Either<CapturedError, A> {
    /// Lossless: the captured error becomes the left payload.
    #[inline]
    fn from(attempt: Attempt<A>) -> Self {
        Self::from_foldable(attempt)
    }
}
