//! Foldable type class - exhaustive two-way case dispatch.
//!
//! Every concrete container in this crate is a closed two-variant sum:
//! a success variant carrying the [`Inner`](super::TypeConstructor::Inner)
//! payload and a failure variant carrying the [`Failure`](Foldable::Failure)
//! payload. `Foldable` exposes the single primitive that unwraps such a
//! container: hand it one handler per variant and it returns whichever
//! handler's result matches the current variant.
//!
//! Everything else in the capability layer — the railway combinators,
//! the cross-kind conversions, the future lifting — is defined in terms
//! of this dispatch.
//!
//! Each container also offers an inherent `fold` taking a named case-map
//! struct (`MaybeCases`, `EitherCases`, `AttemptCases`); `fold_cases` is
//! the positional, kind-generic form of the same operation.
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::Foldable;
//! use railcar::control::{Attempt, Maybe};
//!
//! let present = Maybe::just(2);
//! assert_eq!(present.fold_cases(|n| n * 10, |()| 0), 20);
//!
//! let failed: Attempt<i32> = Attempt::execute(|| panic!("boom"));
//! let message = failed.fold_cases(
//!     |n| n.to_string(),
//!     |error| error.to_string(),
//! );
//! assert_eq!(message, "boom");
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can be unwrapped by exhaustive
/// two-way dispatch.
///
/// # Contract
///
/// Exactly one of the two handlers is invoked, exactly once, matching the
/// variant the container currently holds. No implementation may call
/// both, neither, or either handler more than once.
///
/// # Failure payloads
///
/// The failure payload type is part of the container kind:
///
/// | Container | `Failure` |
/// |---|---|
/// | `Maybe<A>` | `()` (absence carries no payload) |
/// | `Either<L, R>` | `L` |
/// | `Attempt<A>` | `CapturedError` |
pub trait Foldable: TypeConstructor {
    /// The payload type of this container's failure variant.
    type Failure;

    /// Unwraps the container by dispatching to exactly one handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Foldable;
    /// use railcar::control::Either;
    ///
    /// let value: Either<String, i32> = Either::right(42);
    /// let rendered = value.fold_cases(
    ///     |n| format!("right: {n}"),
    ///     |s| format!("left: {s}"),
    /// );
    /// assert_eq!(rendered, "right: 42");
    /// ```
    fn fold_cases<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(Self::Inner) -> T,
        F: FnOnce(Self::Failure) -> T;
}
