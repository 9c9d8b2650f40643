//! Outcome values - a value-typed alternative to multi-valued error returns.
//!
//! This module provides the [`Outcome<T>`] type, a closed two-variant sum
//! type that either holds a value (`Success`) or an opaque failure cause
//! (`Failure`), together with:
//!
//! - The bound combinator algebra (methods on `Outcome<T>`, value type fixed
//!   to `T`)
//! - The unbound combinator algebra (free functions in this module whose
//!   output value type may differ from the input, e.g. [`map`])
//! - The [`catch`] guard that recovers aborts raised by
//!   [`Outcome::unwrap_or_abort`]
//!
//! # Examples
//!
//! ```rust
//! use optcome::{Cause, Outcome};
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     match text.parse::<i32>() {
//!         Ok(value) => Outcome::Success(value),
//!         Err(error) => Outcome::Failure(Cause::new(error)),
//!     }
//! }
//!
//! let doubled = parse("21").map(|value| value * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! assert!(parse("twenty-one").is_failure());
//! ```

mod unbound;

pub use unbound::{and, and_then, catch, from_pair, map, map_or, map_or_else, transpose};

use std::fmt;

use crate::cause::Cause;
use crate::optional::Optional;
use crate::signal;

/// A value that is either a success or a failure with a cause.
///
/// `Outcome<T>` carries exactly one of a success value or an opaque
/// [`Cause`]; there is no "present but also failed" state. The methods on
/// this type form the *bound* algebra: transforms keep the value type fixed
/// to `T`. The free functions in [`outcome`](crate::outcome) (e.g. [`map`])
/// form the unbound algebra and may change the value type.
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Outcome};
///
/// let success = Outcome::Success(42);
/// let failure: Outcome<i32> = Outcome::Failure(Cause::message("no luck"));
///
/// assert_eq!(success.unwrap_or(0), 42);
/// assert_eq!(failure.unwrap_or(0), 0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Holds the success value.
    Success(T),
    /// Holds the failure cause.
    Failure(Cause),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// assert!(Outcome::Success(42).is_success());
    /// assert!(!Outcome::<i32>::Failure(Cause::message("no")).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// assert!(Outcome::<i32>::Failure(Cause::message("no")).is_failure());
    /// assert!(!Outcome::Success(42).is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or aborts with the message annotated by the cause.
    ///
    /// The panic payload is the plain formatted message, so the abort is
    /// never recognized by a [`catch`] scope and always escalates.
    ///
    /// # Panics
    ///
    /// Panics with `"{message}: {cause}"` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Outcome;
    ///
    /// assert_eq!(Outcome::Success(42).expect("should have parsed"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => panic!("{message}: {cause}"),
        }
    }

    /// Returns the value, or aborts the current computation on failure.
    ///
    /// The abort propagates as a panic carrying this crate's private failure
    /// marker and the cause; an enclosing [`catch`] scope converts it back
    /// into `Failure` with the same cause. Without such a scope the abort
    /// behaves like any other panic.
    ///
    /// # Panics
    ///
    /// Panics with the recognizable failure-abort signal if this is a
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Outcome;
    ///
    /// assert_eq!(Outcome::Success(42).unwrap_or_abort(), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_abort(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => signal::abort_failure(cause),
        }
    }

    /// Returns the cause, or aborts with the given diagnostic message.
    ///
    /// Calling this on a `Success` is a programmer error; the resulting
    /// panic carries the plain message and is never recognized by a guard.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// let cause = Cause::message("no luck");
    /// let failure: Outcome<i32> = Outcome::Failure(cause.clone());
    /// assert_eq!(failure.expect_failure("should have failed"), cause);
    /// ```
    #[inline]
    pub fn expect_failure(self, message: &str) -> Cause {
        match self {
            Self::Success(_) => panic!("{message}"),
            Self::Failure(cause) => cause,
        }
    }

    /// Returns the cause, or aborts with a fixed diagnostic on `Success`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`. The payload is a plain diagnostic
    /// string, never the recognizable abort signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// let cause = Cause::message("no luck");
    /// let failure: Outcome<i32> = Outcome::Failure(cause.clone());
    /// assert_eq!(failure.unwrap_failure_or_abort(), cause);
    /// ```
    #[inline]
    pub fn unwrap_failure_or_abort(self) -> Cause {
        match self {
            Self::Success(_) => {
                panic!("called `Outcome::unwrap_failure_or_abort()` on a `Success` value")
            }
            Self::Failure(cause) => cause,
        }
    }

    /// Returns the value, or the given default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// assert_eq!(Outcome::Success(42).unwrap_or(7), 42);
    /// assert_eq!(Outcome::Failure(Cause::message("no")).unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes a default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// assert_eq!(Outcome::Success(42).unwrap_or_else(|| 7), 42);
    /// assert_eq!(Outcome::Failure(Cause::message("no")).unwrap_or_else(|| 7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default_function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default_function(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts the success side into an [`Optional`], discarding the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Optional, Outcome};
    ///
    /// assert_eq!(Outcome::Success(42).success(), Optional::Present(42));
    /// assert_eq!(Outcome::<i32>::Failure(Cause::message("no")).success(), Optional::Empty);
    /// ```
    #[inline]
    pub fn success(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Empty,
        }
    }

    /// Converts the failure side into an [`Optional`], discarding the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Optional, Outcome};
    ///
    /// let cause = Cause::message("no luck");
    /// let failure: Outcome<i32> = Outcome::Failure(cause.clone());
    /// assert_eq!(failure.failure(), Optional::Present(cause));
    /// assert_eq!(Outcome::Success(42).failure(), Optional::Empty);
    /// ```
    #[inline]
    pub fn failure(self) -> Optional<Cause> {
        match self {
            Self::Success(_) => Optional::Empty,
            Self::Failure(cause) => Optional::Present(cause),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the success value, passing failures through.
    ///
    /// The bound form keeps the value type fixed; use the free function
    /// [`map`] to change it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Outcome;
    ///
    /// assert_eq!(Outcome::Success(21).map(|value| value * 2), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(function(value)),
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    /// Applies a function to the failure cause, passing successes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// let replacement = Cause::message("replaced");
    /// let failure: Outcome<i32> = Outcome::Failure(Cause::message("original"));
    ///
    /// let mapped = failure.map_failure(|_| replacement.clone());
    /// assert_eq!(mapped, Outcome::Failure(replacement));
    /// ```
    #[inline]
    pub fn map_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> Cause,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::Failure(function(cause)),
        }
    }

    /// Folds to a plain value: applies the function on success, otherwise
    /// returns the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// assert_eq!(Outcome::Success(21).map_or(0, |value| value * 2), 42);
    /// assert_eq!(Outcome::Failure(Cause::message("no")).map_or(0, |value: i32| value * 2), 0);
    /// ```
    #[inline]
    pub fn map_or<F>(self, default: T, function: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Folds to a plain value with a lazily computed default.
    #[inline]
    pub fn map_or_else<D, F>(self, default_function: D, function: F) -> T
    where
        D: FnOnce() -> T,
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default_function(),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` on success, otherwise passes the failure through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// let cause = Cause::message("no luck");
    ///
    /// assert_eq!(Outcome::Success(1).and(Outcome::Success(2)), Outcome::Success(2));
    /// assert_eq!(
    ///     Outcome::<i32>::Failure(cause.clone()).and(Outcome::Success(2)),
    ///     Outcome::Failure(cause)
    /// );
    /// ```
    #[inline]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Success(_) => other,
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    /// Returns itself on success, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// assert_eq!(Outcome::Success(1).or(Outcome::Success(2)), Outcome::Success(1));
    /// assert_eq!(
    ///     Outcome::Failure(Cause::message("no")).or(Outcome::Success(2)),
    ///     Outcome::Success(2)
    /// );
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => other,
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a computation that itself returns an `Outcome`.
    ///
    /// The bound form keeps the value type fixed; use the free function
    /// [`and_then`] to change it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// fn halve(value: i32) -> Outcome<i32> {
    ///     if value % 2 == 0 {
    ///         Outcome::Success(value / 2)
    ///     } else {
    ///         Outcome::Failure(Cause::message("odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(42).and_then(halve), Outcome::Success(21));
    /// assert!(Outcome::Success(21).and_then(halve).is_failure());
    /// ```
    #[inline]
    pub fn and_then<F>(self, function: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    /// Returns itself on success, otherwise chains a recovery computation
    /// that receives the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// let recovered = Outcome::Failure(Cause::message("no"))
    ///     .or_else(|_cause| Outcome::Success(7));
    /// assert_eq!(recovered, Outcome::Success(7));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => function(cause),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Converts a std `Result` into an `Outcome`, wrapping the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Outcome;
    ///
    /// let outcome: Outcome<i32> = "42".parse::<i32>().into();
    /// assert_eq!(outcome, Outcome::Success(42));
    ///
    /// let outcome: Outcome<i32> = "abc".parse::<i32>().into();
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Cause::new(error)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Cause> {
    /// Converts an `Outcome` into a std `Result` over [`Cause`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::{Cause, Outcome};
    ///
    /// let result: Result<i32, Cause> = Outcome::Success(42).into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(cause),
        }
    }
}
