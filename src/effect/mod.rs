//! Effectful containers: deferred and asynchronous computations.
//!
//! This module provides the two container kinds whose payload is work
//! rather than a settled value:
//!
//! - [`Effect`]: a deferred computation. Combinators build a new
//!   computation; nothing executes until [`run`](Effect::run).
//! - [`TaskEither`]: the asynchronous disjunction. The wrapped work
//!   **starts at construction** and combinators schedule their
//!   continuation immediately (requires the `async` feature).
//!
//! # Eager vs lazy — an intentional asymmetry
//!
//! `Effect` and `TaskEither` deliberately sit on opposite sides of an
//! execution-time line. `Effect` is referentially transparent right up to
//! `run()`: you can build, pass around, and discard pipelines without a
//! side effect occurring. `TaskEither` wraps a spawned task — the
//! asynchronous primitive of the platform is eager, so the initial work
//! begins the moment the container is constructed, and only the
//! downstream transformations wait on it. Do not expect `TaskEither` to
//! defer like `Effect` does, and do not expect `Effect` to have started
//! anything before `run()`.

mod deferred;

pub use deferred::Effect;

#[cfg(feature = "async")]
mod task_either;

#[cfg(feature = "async")]
pub use task_either::TaskEither;
