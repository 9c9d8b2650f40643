//! Optional values - a value-typed alternative to nullable references.
//!
//! This module provides the [`Optional<T>`] type, a closed two-variant sum
//! type that either holds a value (`Present`) or holds nothing (`Empty`),
//! together with:
//!
//! - The bound combinator algebra (methods on `Optional<T>`, value type
//!   fixed to `T`)
//! - The unbound combinator algebra (free functions in this module whose
//!   output value type may differ from the input, e.g. [`map`])
//! - The [`catch`] guard that recovers aborts raised by
//!   [`Optional::unwrap_or_abort`]
//!
//! # Examples
//!
//! ```rust
//! use optcome::Optional;
//!
//! let present = Optional::Present(21);
//!
//! // Combinators compose without explicit emptiness checks
//! let result = present
//!     .map(|value| value * 2)
//!     .filter(|value| *value > 0)
//!     .unwrap_or(0);
//! assert_eq!(result, 42);
//! ```
//!
//! ## Short-circuit extraction
//!
//! ```rust
//! use optcome::{Optional, optional};
//!
//! fn first_even(values: &[i32]) -> Optional<i32> {
//!     optional::catch(|| {
//!         let found = values
//!             .iter()
//!             .copied()
//!             .find(|value| value % 2 == 0);
//!         let found = Optional::from(found).unwrap_or_abort();
//!         Optional::Present(found * 10)
//!     })
//! }
//!
//! assert_eq!(first_even(&[1, 4, 5]), Optional::Present(40));
//! assert_eq!(first_even(&[1, 3, 5]), Optional::Empty);
//! ```

mod unbound;

pub use unbound::{
    and, and_then, catch, flatten, from_pair, map, map_or, map_or_else, transpose, zip, zip_with,
};

use std::fmt;

use crate::cause::Cause;
use crate::outcome::Outcome;
use crate::signal;

/// A value that is either present or empty.
///
/// `Optional<T>` mirrors the role of a nullable reference without the null:
/// exactly one variant is inhabited, the type is closed, and every operation
/// is total except the explicit abort extractions.
///
/// The methods on this type form the *bound* algebra: transforms keep the
/// value type fixed to `T`. The free functions in [`optional`](crate::optional)
/// (e.g. [`map`]) form the unbound algebra and may change the value type.
///
/// # Examples
///
/// ```rust
/// use optcome::Optional;
///
/// let present = Optional::Present(42);
/// let empty: Optional<i32> = Optional::Empty;
///
/// assert_eq!(present.unwrap_or(0), 42);
/// assert_eq!(empty.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// Holds exactly one value.
    Present(T),
    /// Holds nothing.
    Empty,
}

impl<T> Optional<T> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert!(Optional::Present(42).is_present());
    /// assert!(!Optional::<i32>::Empty.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert!(Optional::<i32>::Empty.is_empty());
    /// assert!(!Optional::Present(42).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or aborts the current computation if empty.
    ///
    /// The abort propagates as a panic carrying this crate's private empty
    /// marker; an enclosing [`catch`] scope converts it back into `Empty`.
    /// Without such a scope the abort behaves like any other panic.
    ///
    /// # Panics
    ///
    /// Panics with the recognizable empty-abort signal if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(42).unwrap_or_abort(), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_abort(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => signal::abort_empty(),
        }
    }

    /// Returns the value, or aborts with the given diagnostic message.
    ///
    /// Unlike [`unwrap_or_abort`](Self::unwrap_or_abort), the panic payload
    /// is the literal message, so the abort is never recognized by a
    /// [`catch`] scope and always escalates.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(42).expect("should hold a value"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("{message}"),
        }
    }

    /// Returns the value, or the given default if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(42).unwrap_or(7), 42);
    /// assert_eq!(Optional::Empty.unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the value, or computes a default if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(42).unwrap_or_else(|| 7), 42);
    /// assert_eq!(Optional::Empty.unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => default_function(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an [`Outcome`], using the given cause if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Optional, Outcome};
    ///
    /// let cause = Cause::message("nothing here");
    ///
    /// let success = Optional::Present(42).outcome_or(cause.clone());
    /// assert_eq!(success, Outcome::Success(42));
    ///
    /// let failure = Optional::<i32>::Empty.outcome_or(cause.clone());
    /// assert_eq!(failure, Outcome::Failure(cause));
    /// ```
    #[inline]
    pub fn outcome_or(self, cause: Cause) -> Outcome<T> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Empty => Outcome::Failure(cause),
        }
    }

    /// Converts into an [`Outcome`], computing the cause lazily if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Optional};
    ///
    /// let success = Optional::Present(42).outcome_or_else(|| Cause::message("unused"));
    /// assert!(success.is_success());
    /// ```
    #[inline]
    pub fn outcome_or_else<F>(self, cause_function: F) -> Outcome<T>
    where
        F: FnOnce() -> Cause,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Empty => Outcome::Failure(cause_function()),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(
    ///     Optional::Present(123).filter(|value| *value > 0),
    ///     Optional::Present(123)
    /// );
    /// assert_eq!(
    ///     Optional::Present(123).filter(|value| *value < 0),
    ///     Optional::Empty
    /// );
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    /// Applies a function to the value if present.
    ///
    /// The bound form keeps the value type fixed; use the free function
    /// [`map`] to change it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(21).map(|value| value * 2), Optional::Present(42));
    /// assert_eq!(Optional::Empty.map(|value: i32| value * 2), Optional::Empty);
    /// ```
    #[inline]
    pub fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Present(value) => Self::Present(function(value)),
            Self::Empty => Self::Empty,
        }
    }

    /// Folds to a plain value: applies the function if present, otherwise
    /// returns the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(21).map_or(0, |value| value * 2), 42);
    /// assert_eq!(Optional::Empty.map_or(0, |value: i32| value * 2), 0);
    /// ```
    #[inline]
    pub fn map_or<F>(self, default: T, function: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => default,
        }
    }

    /// Folds to a plain value with a lazily computed default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(
    ///     Optional::Present(21).map_or_else(|| 0, |value| value * 2),
    ///     42
    /// );
    /// ```
    #[inline]
    pub fn map_or_else<D, F>(self, default_function: D, function: F) -> T
    where
        D: FnOnce() -> T,
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => default_function(),
        }
    }

    // =========================================================================
    // Pairing
    // =========================================================================

    /// Combines two present values with the given function; empty otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// let sum = Optional::Present(1).zip_with(Optional::Present(2), |a, b| a + b);
    /// assert_eq!(sum, Optional::Present(3));
    ///
    /// let none = Optional::Present(1).zip_with(Optional::Empty, |a, b| a + b);
    /// assert_eq!(none, Optional::Empty);
    /// ```
    #[inline]
    pub fn zip_with<F>(self, other: Self, function: F) -> Self
    where
        F: FnOnce(T, T) -> T,
    {
        match (self, other) {
            (Self::Present(first), Self::Present(second)) => {
                Self::Present(function(first, second))
            }
            _ => Self::Empty,
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if present, otherwise `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(1).and(Optional::Present(2)), Optional::Present(2));
    /// assert_eq!(Optional::Empty.and(Optional::Present(2)), Optional::Empty);
    /// ```
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Present(_) => other,
            Self::Empty => Self::Empty,
        }
    }

    /// Returns itself if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(1).or(Optional::Present(2)), Optional::Present(1));
    /// assert_eq!(Optional::Empty.or(Optional::Present(2)), Optional::Present(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Empty => other,
        }
    }

    /// Returns whichever side is present, or `Empty` if both or neither are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::Present(1).xor(Optional::Present(2)), Optional::Empty);
    /// assert_eq!(Optional::Present(1).xor(Optional::Empty), Optional::Present(1));
    /// assert_eq!(Optional::Empty.xor(Optional::Present(2)), Optional::Present(2));
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Empty) | (Self::Empty, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Empty,
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a computation that itself returns an `Optional`.
    ///
    /// The bound form keeps the value type fixed; use the free function
    /// [`and_then`] to change it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// fn half(value: i32) -> Optional<i32> {
    ///     if value % 2 == 0 {
    ///         Optional::Present(value / 2)
    ///     } else {
    ///         Optional::Empty
    ///     }
    /// }
    ///
    /// assert_eq!(Optional::Present(42).and_then(half), Optional::Present(21));
    /// assert_eq!(Optional::Present(21).and_then(half), Optional::Empty);
    /// assert_eq!(Optional::Empty.and_then(half), Optional::Empty);
    /// ```
    #[inline]
    pub fn and_then<F>(self, function: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Self::Empty,
        }
    }

    /// Returns itself if present, otherwise the result of the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(
    ///     Optional::Present(1).or_else(|| Optional::Present(2)),
    ///     Optional::Present(1)
    /// );
    /// assert_eq!(
    ///     Optional::Empty.or_else(|| Optional::Present(2)),
    ///     Optional::Present(2)
    /// );
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Empty => function(),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns `Empty`, for any value type.
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a std `Option` into an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// assert_eq!(Optional::from(Some(42)), Optional::Present(42));
    /// assert_eq!(Optional::<i32>::from(None), Optional::Empty);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` into a std `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Optional;
    ///
    /// let option: Option<i32> = Optional::Present(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    /// Serializes exactly like `Option<T>`: `Empty` as none, `Present` as
    /// the wrapped value.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
