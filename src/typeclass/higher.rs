//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors like `Maybe<_>` or
//! `Either<L, _>` directly. This module provides [`TypeConstructor`],
//! which uses a Generic Associated Type to express "the same container
//! kind, rebound to a different success type" — the foundation every
//! capability trait in this crate builds on.
//!
//! For failure-carrying kinds such as `Either<L, R>`, rebinding touches
//! only the success side: `Either<L, R>::WithType<B>` is `Either<L, B>`.
//! The failure type is part of the kind and survives every rebind, which
//! is what lets success-track combinators guarantee they propagate a
//! failure payload unchanged.
//!
//! # Example
//!
//! ```rust
//! use railcar::typeclass::TypeConstructor;
//! use railcar::control::Maybe;
//!
//! fn rebind<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = rebind(&Maybe::just(42));
//! assert_eq!(absent, Maybe::nothing());
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over container kinds like `Maybe<_>`,
/// `Either<L, _>`, or `Attempt<_>`.
///
/// # Associated Types
///
/// - `Inner`: the success type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to a different success
///   type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be equivalent to `F` (up to type equality).
/// 2. **Failure preservation**: rebinding never changes the failure side
///    of a two-track kind.
pub trait TypeConstructor {
    /// The success type this constructor is applied to.
    ///
    /// For example, for `Either<String, i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different success type `B`.
    ///
    /// For example, for `Either<String, i32>`, `WithType<bool>` is
    /// `Either<String, bool>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the
    /// resulting type is also a valid type constructor, maintaining the
    /// ability to chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}
