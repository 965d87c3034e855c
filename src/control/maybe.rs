//! Maybe type - a value that is present or absent.
//!
//! This module provides the `Maybe<A>` type, which represents a value
//! that is either `Just(A)` or `Nothing`. Absence carries no payload; it
//! becomes an error only when a conversion into a failure-carrying kind
//! synthesizes one (see [`convert`](super) and
//! [`CapturedError::absent`](super::CapturedError::absent)).
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::{Maybe, MaybeCases};
//!
//! // The nullable boundary: Option is Rust's null
//! let present = Maybe::of(Some(42));
//! let absent: Maybe<i32> = Maybe::of(None);
//!
//! assert_eq!(present.get_or_else(0), 42);
//! assert_eq!(absent.get_or_else(0), 0);
//!
//! // Exhaustive dispatch through the case map
//! let rendered = present.fold(MaybeCases {
//!     if_just: |n| format!("got {n}"),
//!     if_nothing: || "empty".to_string(),
//! });
//! assert_eq!(rendered, "got 42");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Monad, Railway, TypeConstructor};

/// A value that is present or absent.
///
/// `Maybe<A>` is a closed two-variant sum: `Just(A)` or `Nothing`.
/// Instances are immutable; every combinator returns a new value.
/// Separate `Nothing` values compare equal structurally.
///
/// # Examples
///
/// ```rust
/// use railcar::control::Maybe;
///
/// let doubled = Maybe::just(21).map(|n| n * 2);
/// assert_eq!(doubled, Maybe::just(42));
///
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert_eq!(absent.map(|n| n * 2), Maybe::nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// The present variant, holding the value.
    Just(A),
    /// The absent variant. Carries no payload.
    Nothing,
}

/// Exhaustive case map for [`Maybe::fold`].
///
/// Exactly one handler runs, matching the current variant.
pub struct MaybeCases<J, N> {
    /// Handler for the `Just` variant; receives the value.
    pub if_just: J,
    /// Handler for the `Nothing` variant.
    pub if_nothing: N,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Constructs from the nullable boundary: `Some` becomes `Just`,
    /// `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::just(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::nothing());
    /// ```
    #[inline]
    pub fn of(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Constructs the present variant directly, without the nullable
    /// check.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Constructs the absent variant.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|n| n + 1), Maybe::just(3));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n + 1), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains into another `Maybe`, flattening the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// let first_char = Maybe::just("hi").flat_map(|s| Maybe::of(s.chars().next()));
    /// assert_eq!(first_char, Maybe::just('h'));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`flat_map`](Maybe::flat_map), matching Rust's naming
    /// conventions.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    /// Keeps the value only if the predicate holds; otherwise becomes
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).filter(|n| n % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).filter(|n| n % 2 == 0), Maybe::nothing());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or `default` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).get_or_else(9), 1);
    /// assert_eq!(Maybe::nothing().get_or_else(9), 9);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Runs `action` on a reference to the value if present; returns the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::Maybe;
    ///
    /// let mut seen = None;
    /// let value = Maybe::just(7).on_just(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(value, Maybe::just(7));
    /// ```
    #[inline]
    pub fn on_just<F>(self, action: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Just(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if absent; returns the container unchanged.
    #[inline]
    pub fn on_nothing<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_nothing() {
            action();
        }
        self
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Maybe` by dispatching to exactly one handler of
    /// the case map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::{Maybe, MaybeCases};
    ///
    /// let label = Maybe::<i32>::nothing().fold(MaybeCases {
    ///     if_just: |n: i32| n.to_string(),
    ///     if_nothing: || "-".to_string(),
    /// });
    /// assert_eq!(label, "-");
    /// ```
    #[inline]
    pub fn fold<T, J, N>(self, cases: MaybeCases<J, N>) -> T
    where
        J: FnOnce(A) -> T,
        N: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => (cases.if_just)(value),
            Self::Nothing => (cases.if_nothing)(),
        }
    }
}

// =============================================================================
// Debug and Default Implementations
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<A> Default for Maybe<A> {
    /// The absent variant.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(first), Maybe::Just(second), Maybe::Just(third)) => {
                Maybe::Just(function(first, second, third))
            }
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Foldable for Maybe<A> {
    type Failure = ();

    #[inline]
    fn fold_cases<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(A) -> T,
        F: FnOnce(()) -> T,
    {
        match self {
            Self::Just(value) => on_success(value),
            Self::Nothing => on_failure(()),
        }
    }
}

impl<A> Railway for Maybe<A> {
    #[inline]
    fn succeed<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn fail<B>(_failure: ()) -> Maybe<B> {
        Maybe::Nothing
    }

    #[inline]
    fn or_else<F>(self, transform: F) -> Self
    where
        F: FnOnce(()) -> Self,
    {
        match self {
            Self::Nothing => transform(()),
            just => just,
        }
    }
}
