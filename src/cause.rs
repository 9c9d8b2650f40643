//! Failure cause - the opaque error value carried by [`Outcome::Failure`].
//!
//! This module provides the [`Cause`] type, a shared, type-erased wrapper
//! around any standard error value. It is the single failure-cause type used
//! by [`Outcome<T>`](crate::Outcome):
//!
//! - Constructed from any `std::error::Error` type, or from a plain message
//! - Cheap to clone (shared allocation)
//! - Compared by allocation identity, not by message content
//!
//! # Equality
//!
//! Two `Cause` values are equal only when they share the same underlying
//! allocation. Clones of a cause are equal to the original; independently
//! constructed causes with identical messages are not:
//!
//! ```rust
//! use optcome::Cause;
//!
//! let cause = Cause::message("out of range");
//! assert_eq!(cause, cause.clone());
//! assert_ne!(cause, Cause::message("out of range"));
//! ```
//!
//! Identity equality is what lets a caller check *which* failure came back
//! out of a combinator chain or a recovered abort, rather than merely one
//! with the same text.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An opaque failure cause.
///
/// `Cause` wraps an arbitrary error value behind a shared handle. It is the
/// payload of [`Outcome::Failure`](crate::Outcome::Failure) and the value a
/// recovered failure abort carries back to its guard.
///
/// # Examples
///
/// ```rust
/// use optcome::Cause;
/// use std::num::ParseIntError;
///
/// let parse_error: ParseIntError = "abc".parse::<i32>().unwrap_err();
/// let cause = Cause::new(parse_error);
///
/// assert!(cause.downcast_ref::<ParseIntError>().is_some());
/// ```
#[derive(Clone)]
pub struct Cause {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Cause {
    /// Creates a cause from any standard error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Cause;
    ///
    /// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let cause = Cause::new(error);
    /// assert_eq!(cause.to_string(), "missing");
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates a cause from a plain message.
    ///
    /// This is the lightweight constructor for ad-hoc failures that have no
    /// richer error type behind them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Cause;
    ///
    /// let cause = Cause::message("lookup failed");
    /// assert_eq!(cause.to_string(), "lookup failed");
    /// ```
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(MessageError(message.into())),
        }
    }

    /// Returns a reference to the wrapped error.
    ///
    /// Useful for walking `source()` chains or passing the error to code
    /// that expects `&dyn Error`.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempts to downcast the wrapped error to a concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Cause;
    /// use std::num::ParseIntError;
    ///
    /// let cause = Cause::new("abc".parse::<i32>().unwrap_err());
    /// assert!(cause.downcast_ref::<ParseIntError>().is_some());
    /// assert!(cause.downcast_ref::<std::io::Error>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if both causes share the same underlying allocation.
    ///
    /// This is the same check [`PartialEq`] performs; it is exposed directly
    /// for call sites where an explicit identity comparison reads better.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Cause {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    /// Wraps any standard error value in a `Cause`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optcome::Cause;
    ///
    /// let error = std::io::Error::other("boom");
    /// let cause: Cause = error.into();
    /// assert_eq!(cause.to_string(), "boom");
    /// ```
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// Message-only error used by [`Cause::message`].
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl fmt::Debug for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for MessageError {}
