//! Effect - deferred side effect handling.
//!
//! The `Effect` type wraps a zero-argument computation so that
//! transformation operations build a pipeline without executing anything.
//! Execution is an explicit, separate step: [`Effect::run`], to be called
//! at the program's edge.
//!
//! `Effect` does not capture errors — a computation that panics at run
//! time panics through `run()` uncaught. Capturing belongs to
//! [`Attempt::execute`](crate::control::Attempt::execute); wrap the
//! `run()` call when the outcome should travel in-band.
//!
//! For the asynchronous counterpart — which is **not** lazy — see
//! [`TaskEither`](super::TaskEither) and the module documentation on the
//! eager/lazy asymmetry.
//!
//! # Examples
//!
//! ```rust
//! use railcar::effect::Effect;
//!
//! let effect = Effect::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| Effect::pure(x + 1));
//! assert_eq!(effect.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use railcar::effect::Effect;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let flag = executed.clone();
//!
//! let effect = Effect::new(move || {
//!     flag.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! let result = effect.run();
//! assert!(executed.load(Ordering::SeqCst));
//! assert_eq!(result, 42);
//! ```

use crate::typeclass::TypeConstructor;

/// A deferred computation producing a value of type `A`.
///
/// `Effect<A>` wraps a computation that may perform side effects. The
/// computation is not executed until [`run`](Effect::run) is called;
/// every combinator returns a new `Effect` describing the larger
/// pipeline.
///
/// # Monad Laws
///
/// `Effect` satisfies the monad laws up to execution:
///
/// 1. **Left Identity**: `Effect::pure(a).flat_map(f)` runs as `f(a)`
/// 2. **Right Identity**: `m.flat_map(Effect::pure)` runs as `m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g)` runs as
///    `m.flat_map(|x| f(x).flat_map(g))`
///
/// # Trait surface
///
/// `Effect` implements [`TypeConstructor`] but not
/// [`Functor`](crate::typeclass::Functor): a by-reference `fmap_ref`
/// cannot exist for an owned thunk, so the combinators are inherent
/// methods.
pub struct Effect<A> {
    /// The wrapped computation.
    thunk: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> Effect<A> {
    /// Creates a new deferred computation from a closure.
    ///
    /// The closure will not be executed until [`run`](Effect::run) is
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::effect::Effect;
    ///
    /// let effect = Effect::new(|| 10 + 20);
    /// assert_eq!(effect.run(), 30);
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            thunk: Box::new(computation),
        }
    }

    /// Wraps an already-computed value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::effect::Effect;
    ///
    /// assert_eq!(Effect::pure(42).run(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the composed computation and returns its value.
    ///
    /// This is the only execution point. A computation that panics
    /// panics through this call uncaught — wrap the call in
    /// [`Attempt::execute`](crate::control::Attempt::execute) to capture
    /// the outcome in-band.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::effect::Effect;
    ///
    /// let effect = Effect::pure(21).fmap(|x| x * 2);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn run(self) -> A {
        (self.thunk)()
    }

    /// Builds a new computation that applies `function` to this one's
    /// result.
    ///
    /// No effect occurs during composition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::effect::Effect;
    ///
    /// let effect = Effect::pure(21).fmap(|x| x * 2);
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Effect<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Effect::new(move || function(self.run()))
    }

    /// Builds a new computation that runs this one, feeds the result to
    /// `function`, and runs the computation it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::effect::Effect;
    ///
    /// let effect = Effect::pure(10).flat_map(|x| Effect::pure(x * 2));
    /// assert_eq!(effect.run(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Effect<B>
    where
        F: FnOnce(A) -> Effect<B> + 'static,
        B: 'static,
    {
        Effect::new(move || function(self.run()).run())
    }

    /// Alias for `flat_map`, matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Effect<B>
    where
        F: FnOnce(A) -> Effect<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding this one's result.
    ///
    /// This computation still runs for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::effect::Effect;
    ///
    /// let effect = Effect::pure(10).then(Effect::pure(20));
    /// assert_eq!(effect.run(), 20);
    /// ```
    pub fn then<B>(self, next: Effect<B>) -> Effect<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Lifts the deferred computation into a future that executes it
    /// when first polled.
    ///
    /// Laziness is preserved: awaiting is what runs the pipeline.
    #[cfg(feature = "async")]
    pub fn to_future(self) -> impl Future<Output = A> {
        futures::future::lazy(|_| self.run())
    }
}

impl<A> TypeConstructor for Effect<A> {
    type Inner = A;
    type WithType<B> = Effect<B>;
}
