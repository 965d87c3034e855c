//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents container
//! kinds that can have a function applied to their success value while
//! preserving the container's shape — and, for two-track kinds, while
//! leaving a failure payload untouched.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent
//! functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railcar::typeclass::Functor;
//! use railcar::control::Maybe;
//!
//! let present = Maybe::just(5);
//! let rendered: Maybe<String> = present.fmap(|n| n.to_string());
//! assert_eq!(rendered, Maybe::just("5".to_string()));
//!
//! // Absence is preserved
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can have a function mapped over their
/// success value.
///
/// `Functor` represents the ability to apply a function to the value
/// inside a container while preserving the container's structure. On a
/// failure variant, `fmap` is a no-op that propagates the failure payload
/// unchanged.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use railcar::typeclass::Functor;
/// use railcar::control::Either;
///
/// let success: Either<String, i32> = Either::right(5);
/// assert_eq!(success.fmap(|n| n * 2), Either::right(10));
///
/// let failure: Either<String, i32> = Either::left("boom".to_string());
/// assert_eq!(failure.fmap(|n| n * 2), Either::left("boom".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the success value inside the functor.
    ///
    /// This is the primary operation of the Functor type class. It takes a
    /// function that transforms the inner type and returns a new functor
    /// with the transformed value; a failure variant passes through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Functor;
    /// use railcar::control::Maybe;
    ///
    /// let value = Maybe::just(5);
    /// assert_eq!(value.fmap(|n| n * 2), Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the success value.
    ///
    /// This method is useful when you want to transform the container's
    /// contents without consuming it, or when the inner type does not
    /// implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Functor;
    /// use railcar::control::Maybe;
    ///
    /// let name = Maybe::just("hello".to_string());
    /// let length: Maybe<usize> = name.fmap_ref(|s| s.len());
    /// assert_eq!(length, Maybe::just(5));
    /// // name is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the success value with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Functor;
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert_eq!(Maybe::<i32>::nothing().replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the success value, replacing it with `()`.
    ///
    /// This is useful when only the track the container sits on matters,
    /// not the value it carries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::typeclass::Functor;
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).void(), Maybe::just(()));
    /// assert_eq!(Maybe::<i32>::nothing().void(), Maybe::nothing());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
