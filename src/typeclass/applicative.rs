//! Applicative type class - lifting values and zipping containers.
//!
//! This module provides the `Applicative` trait, which extends
//! [`Functor`] with the ability to lift a pure value into a container
//! (`pure`) and to combine the success values of independent containers
//! (`map2`, `map3`, `product`).
//!
//! The zip operations are the crate's ordered-tuple combination
//! primitive: `self` is inspected first, then the other containers in
//! argument order, and the first failure encountered is returned
//! unchanged without inspecting the rest.
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::Applicative;
//! use railcar::control::Either;
//!
//! let id: Either<String, i32> = Either::right(1);
//! let name: Either<String, &str> = Either::right("a");
//! let active: Either<String, bool> = Either::right(true);
//!
//! let zipped = id.map3(name, active, |i, n, a| (i, n, a));
//! assert_eq!(zipped, Either::right((1, "a", true)));
//! ```

use super::functor::Functor;

/// A type class for containers supporting value lifting and independent
/// combination.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// Self::pure(v).map2(fa, |_, a| a) == fa
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
/// ```
///
/// # Ordering
///
/// `map2`/`map3`/`product` examine `self` first, then the arguments in
/// order. The first failure wins and is propagated with its payload
/// unchanged; later containers are not inspected.
pub trait Applicative: Functor {
    /// Lifts a pure value into the container's success variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Applicative;
    /// use railcar::control::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::<()>::pure(42);
    /// assert_eq!(value, Maybe::just(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers' success values with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Applicative;
    /// use railcar::control::Maybe;
    ///
    /// let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
    /// assert_eq!(sum, Maybe::just(3));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers' success values with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Applicative;
    /// use railcar::control::Maybe;
    ///
    /// let sum = Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |a, b, c| a + b + c);
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two containers into an ordered pair of their success
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Applicative;
    /// use railcar::control::Maybe;
    ///
    /// let pair = Maybe::just(1).product(Maybe::just("a"));
    /// assert_eq!(pair, Maybe::just((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}
