//! Capability traits shared by every container kind.
//!
//! This module provides the small set of type classes (traits) that give
//! the containers their uniform combinator vocabulary:
//!
//! - [`Functor`]: mapping over the success value
//! - [`Applicative`]: lifting pure values and zipping containers
//! - [`Monad`]: sequencing computations with dependency
//! - [`Foldable`]: exhaustive two-way case dispatch
//! - [`Railway`]: success/failure-track chaining and combination
//! - [`Futurizable`]: lifting a settled container into a pending future
//!   (requires the `async` feature)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to rebind a
//! container's success type generically.
//!
//! ## Two tracks, one contract
//!
//! Every concrete container is a closed two-variant sum: a success
//! variant holding the [`TypeConstructor::Inner`] payload and a failure
//! variant holding the [`Foldable::Failure`] payload. [`Foldable::
//! fold_cases`] is the single primitive that unwraps a container by
//! dispatching to exactly one of two handlers; everything else — the
//! railway combinators, the cross-kind conversions, the future lifting —
//! is defined in terms of it.
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::{Foldable, Railway};
//! use railcar::control::Either;
//!
//! let parsed: Either<String, i32> = Either::right(21);
//!
//! let doubled = parsed.and_then(|n| Either::right(n * 2));
//! let rendered = doubled.fold_cases(
//!     |n| format!("ok: {n}"),
//!     |error| format!("failed: {error}"),
//! );
//! assert_eq!(rendered, "ok: 42");
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod railway;

#[cfg(feature = "async")]
mod futurizable;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use railway::Railway;

#[cfg(feature = "async")]
pub use futurizable::Futurizable;
