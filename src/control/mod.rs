//! Synchronous result containers.
//!
//! This module provides the three synchronous container kinds, each a
//! closed two-variant sum, immutable once constructed:
//!
//! - [`Maybe`]: a value that is present (`Just`) or absent (`Nothing`)
//! - [`Either`]: a value on one of two tracks, `Right` (success) or
//!   `Left` (failure), with an arbitrary failure payload
//! - [`Attempt`]: the outcome of invoking a computation that may panic,
//!   with the failure payload normalized to [`CapturedError`]
//!
//! Every transformation returns a new container; no method mutates a
//! variant in place, and no container holds a reference back to the
//! container that produced it. Failure payloads are carried in-band:
//! nothing in this module logs, prints, or re-raises, except the single
//! sanctioned point [`Attempt::unwrap_success`].
//!
//! Each kind has a named case-map struct ([`MaybeCases`], [`EitherCases`],
//! [`AttemptCases`]) whose two handler fields make `fold` exhaustive at
//! compile time.
//!
//! Cross-kind conversions live in [`convert`](self) as `From` impls and
//! `from_foldable` constructors; each documents its normalization rule.

mod attempt;
mod convert;
mod either;
mod error;
mod maybe;

pub use attempt::{Attempt, AttemptCases};
pub use either::{Either, EitherCases};
pub use error::CapturedError;
pub use maybe::{Maybe, MaybeCases};

// Auto-trait guarantees on the public containers. The containers are
// plain value types; losing Send/Sync would be an API break.
static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Either<String, i32>: Clone, Send, Sync);
static_assertions::assert_impl_all!(Attempt<i32>: Clone, Send, Sync);
static_assertions::assert_impl_all!(CapturedError: Clone, Send, Sync);
