//! Futurizable type class - lifting settled containers into futures.
//!
//! Every synchronous value container can be converted into a pending
//! asynchronous unit of work: a success payload becomes a resolved
//! future, a failure payload a rejected one. The rejection side is
//! normalized to [`CapturedError`] so the lifted future has a uniform
//! error type regardless of the source kind:
//!
//! - `Maybe`: absence rejects with the fixed "No value" error
//! - `Either`: a left payload rejects via its `Display` rendering
//! - `Attempt`: the captured error rejects as-is
//!
//! The returned future is already settled — awaiting it never suspends.
//! To lift *unstarted* work instead, see
//! [`Effect::to_future`](crate::effect::Effect::to_future) and
//! [`TaskEither`](crate::effect::TaskEither).
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::Futurizable;
//! use railcar::control::Maybe;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let resolved = Maybe::just(42).to_future().await;
//! assert_eq!(resolved.unwrap(), 42);
//!
//! let rejected = Maybe::<i32>::nothing().to_future().await;
//! assert_eq!(rejected.unwrap_err().to_string(), "No value");
//! # });
//! ```

use std::fmt;

use futures::future::{self, Ready};

use crate::control::{Attempt, CapturedError, Either, Maybe};

use super::foldable::Foldable;

/// A type class for settled containers that can be lifted into a pending
/// asynchronous result.
///
/// The success payload resolves; the failure payload rejects, normalized
/// to [`CapturedError`] per kind (see the module documentation for the
/// exact rule per container).
pub trait Futurizable: Foldable + Sized {
    /// Converts the container's terminal value into an already-settled
    /// future.
    fn to_future(self) -> Ready<Result<Self::Inner, CapturedError>>;
}

impl<A> Futurizable for Maybe<A> {
    /// Absence rejects with the fixed "No value" error.
    #[inline]
    fn to_future(self) -> Ready<Result<A, CapturedError>> {
        future::ready(self.fold_cases(Ok, |()| Err(CapturedError::absent())))
    }
}

impl<L: fmt::Display, R> Futurizable for Either<L, R> {
    /// A left payload rejects with an error carrying its `Display`
    /// rendering; richer structure on `L` is discarded.
    #[inline]
    fn to_future(self) -> Ready<Result<R, CapturedError>> {
        future::ready(self.fold_cases(Ok, |left| Err(CapturedError::msg(left.to_string()))))
    }
}

impl<A> Futurizable for Attempt<A> {
    /// The captured error rejects unchanged.
    #[inline]
    fn to_future(self) -> Ready<Result<A, CapturedError>> {
        future::ready(self.into_result())
    }
}
