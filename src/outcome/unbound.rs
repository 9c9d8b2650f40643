//! Unbound combinators and the abort guard for [`Outcome`].
//!
//! Mirrors the bound algebra on [`Outcome<T>`] with free functions whose
//! output value type may differ from the input, plus the scope guard
//! [`catch`] and the pair-return bridge [`from_pair`].

use std::panic::{self, AssertUnwindSafe};

use crate::cause::Cause;
use crate::optional::Optional;
use crate::signal::FailureUnwind;

use super::Outcome;

/// Runs a closure, recovering any failure-abort raised inside it.
///
/// If the closure returns normally its result is passed through. If it
/// unwinds with the signal raised by [`Outcome::unwrap_or_abort`] on
/// `Failure`, the unwind stops here and the scope evaluates to `Failure`
/// carrying the same [`Cause`] allocation that was thrown. Any other unwind
/// — a message abort from [`Outcome::expect`], an empty-abort belonging to
/// [`Optional`](crate::Optional), an assertion failure, anything — is
/// re-raised with its payload untouched, exactly as if this guard were
/// absent.
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Outcome, outcome};
///
/// fn parse_and_double(text: &str) -> Outcome<i32> {
///     outcome::catch(|| {
///         let value = Outcome::from(text.parse::<i32>()).unwrap_or_abort();
///         Outcome::Success(value * 2)
///     })
/// }
///
/// assert_eq!(parse_and_double("21"), Outcome::Success(42));
/// assert!(parse_and_double("twenty-one").is_failure());
/// ```
pub fn catch<T, F>(body: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(payload) => match payload.downcast::<FailureUnwind>() {
            Ok(signal) => Outcome::Failure(signal.cause),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

/// Swaps the nesting of an outcome of an optional into an optional outcome.
///
/// - `Success(Present(v))` becomes `Present(Success(v))`
/// - `Success(Empty)` becomes `Empty`
/// - `Failure(c)` becomes `Present(Failure(c))`
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, Outcome, outcome};
///
/// let nested = Outcome::Success(Optional::Present(42));
/// assert_eq!(
///     outcome::transpose(nested),
///     Optional::Present(Outcome::Success(42))
/// );
///
/// let empty = Outcome::Success(Optional::<i32>::Empty);
/// assert_eq!(outcome::transpose(empty), Optional::Empty);
/// ```
#[inline]
pub fn transpose<T>(input: Outcome<Optional<T>>) -> Optional<Outcome<T>> {
    match input {
        Outcome::Success(Optional::Present(value)) => Optional::Present(Outcome::Success(value)),
        Outcome::Success(Optional::Empty) => Optional::Empty,
        Outcome::Failure(cause) => Optional::Present(Outcome::Failure(cause)),
    }
}

/// Applies a function to the success value, allowing the output type to
/// differ from the input. Failures pass through with their cause intact.
///
/// # Examples
///
/// ```rust
/// use optcome::{Outcome, outcome};
///
/// let length = outcome::map(Outcome::Success("hello"), |text| text.len());
/// assert_eq!(length, Outcome::Success(5));
/// ```
#[inline]
pub fn map<T, U, F>(input: Outcome<T>, function: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    match input {
        Outcome::Success(value) => Outcome::Success(function(value)),
        Outcome::Failure(cause) => Outcome::Failure(cause),
    }
}

/// Folds to a plain value of a possibly different type.
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Outcome, outcome};
///
/// assert_eq!(outcome::map_or(Outcome::Success(21), 0, |value| value * 2), 42);
/// assert_eq!(
///     outcome::map_or(Outcome::<i32>::Failure(Cause::message("no")), 0, |value| value * 2),
///     0
/// );
/// ```
#[inline]
pub fn map_or<T, U, F>(input: Outcome<T>, default: U, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    match input {
        Outcome::Success(value) => function(value),
        Outcome::Failure(_) => default,
    }
}

/// Folds to a plain value with a lazily computed default.
#[inline]
pub fn map_or_else<T, U, D, F>(input: Outcome<T>, default_function: D, function: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    match input {
        Outcome::Success(value) => function(value),
        Outcome::Failure(_) => default_function(),
    }
}

/// Returns `second` if `first` succeeded, otherwise passes `first`'s failure
/// through with its cause intact.
///
/// The heterogeneous counterpart of [`Outcome::and`].
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Outcome, outcome};
///
/// assert_eq!(
///     outcome::and(Outcome::Success(123), Outcome::Success("x")),
///     Outcome::Success("x")
/// );
///
/// let cause = Cause::message("no luck");
/// assert_eq!(
///     outcome::and(Outcome::<i32>::Failure(cause.clone()), Outcome::Success("x")),
///     Outcome::Failure(cause)
/// );
/// ```
#[inline]
pub fn and<A, B>(first: Outcome<A>, second: Outcome<B>) -> Outcome<B> {
    match first {
        Outcome::Success(_) => second,
        Outcome::Failure(cause) => Outcome::Failure(cause),
    }
}

/// Chains a computation whose outcome value type differs from the input.
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Outcome, outcome};
///
/// fn describe(value: i32) -> Outcome<String> {
///     if value > 0 {
///         Outcome::Success(format!("{value} is positive"))
///     } else {
///         Outcome::Failure(Cause::message("not positive"))
///     }
/// }
///
/// assert_eq!(
///     outcome::and_then(Outcome::Success(42), describe),
///     Outcome::Success("42 is positive".to_string())
/// );
/// ```
#[inline]
pub fn and_then<A, B, F>(first: Outcome<A>, function: F) -> Outcome<B>
where
    F: FnOnce(A) -> Outcome<B>,
{
    match first {
        Outcome::Success(value) => function(value),
        Outcome::Failure(cause) => Outcome::Failure(cause),
    }
}

/// Bridges a "value plus absent-on-success cause" pair into an `Outcome`.
///
/// A `None` cause means the value stands; any cause at all replaces it.
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Outcome, outcome};
///
/// assert_eq!(outcome::from_pair(123, None), Outcome::Success(123));
///
/// let cause = Cause::message("lookup failed");
/// assert_eq!(
///     outcome::from_pair(0, Some(cause.clone())),
///     Outcome::Failure(cause)
/// );
/// ```
#[inline]
pub fn from_pair<T>(value: T, cause: Option<Cause>) -> Outcome<T> {
    match cause {
        None => Outcome::Success(value),
        Some(cause) => Outcome::Failure(cause),
    }
}
