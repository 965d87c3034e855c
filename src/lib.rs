//! # railcar
//!
//! Railway-oriented result containers for Rust: values that may be absent,
//! may have failed, or may arrive asynchronously, composed through a
//! uniform combinator vocabulary.
//!
//! ## Overview
//!
//! The crate provides five container families, each a closed two-variant
//! sum (or a wrapped computation), immutable once constructed:
//!
//! - [`Maybe`](control::Maybe): a value that is present or absent
//! - [`Either`](control::Either): a value on one of two tracks, success
//!   (`Right`) or failure (`Left`)
//! - [`Attempt`](control::Attempt): the outcome of a computation that may
//!   panic, with the failure payload normalized to an error
//! - [`Effect`](effect::Effect): a deferred computation that composes
//!   without executing
//! - [`TaskEither`](effect::TaskEither): the asynchronous disjunction,
//!   eagerly started and observable any number of times
//!
//! They share a small capability layer: [`Functor`](typeclass::Functor)
//! and [`Monad`](typeclass::Monad) for transformation,
//! [`Foldable`](typeclass::Foldable) for exhaustive case dispatch, and
//! [`Railway`](typeclass::Railway) for success/failure-track chaining.
//! Once a container sits on the failure track, success-track combinators
//! propagate it unchanged; only the failure-track operations may touch it.
//!
//! ## Feature Flags
//!
//! - `typeclass`: capability traits (Functor, Monad, Foldable, Railway)
//! - `control`: synchronous containers (Maybe, Either, Attempt)
//! - `effect`: the deferred-effect container (Effect)
//! - `async`: the asynchronous container (TaskEither) and `Futurizable`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use railcar::prelude::*;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::right(42));
//!
//! let recovered: Either<String, i32> = parse("oops").recover(|_| Either::right(0));
//! assert_eq!(recovered, Either::right(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railcar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
