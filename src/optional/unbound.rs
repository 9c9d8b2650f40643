//! Unbound combinators and the abort guard for [`Optional`].
//!
//! The methods on [`Optional<T>`] are bound to a single value type: a
//! transform maps `T` to `T`. The free functions here mirror that algebra
//! while letting the output value type differ from the input, and they host
//! the two operations that cannot be methods at all: [`catch`], which guards
//! a whole scope, and [`from_pair`], which bridges host-idiom pair returns.

use std::panic::{self, AssertUnwindSafe};

use crate::cause::Cause;
use crate::outcome::Outcome;
use crate::signal::EmptyUnwind;

use super::Optional;

/// Runs a closure, recovering any empty-abort raised inside it.
///
/// If the closure returns normally its result is passed through. If it
/// unwinds with the signal raised by
/// [`Optional::unwrap_or_abort`] on `Empty`, the unwind stops here and the
/// scope evaluates to `Empty`. Any other unwind — a message abort from
/// [`Optional::expect`], a failure-abort belonging to
/// [`Outcome`](crate::Outcome), an assertion failure, anything — is
/// re-raised with its payload untouched, exactly as if this guard were
/// absent.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// fn checked_ratio(numerator: i32, denominator: i32) -> Optional<i32> {
///     optional::catch(|| {
///         let denominator = Optional::from((denominator != 0).then_some(denominator))
///             .unwrap_or_abort();
///         Optional::Present(numerator / denominator)
///     })
/// }
///
/// assert_eq!(checked_ratio(10, 2), Optional::Present(5));
/// assert_eq!(checked_ratio(10, 0), Optional::Empty);
/// ```
pub fn catch<T, F>(body: F) -> Optional<T>
where
    F: FnOnce() -> Optional<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(payload) => match payload.downcast::<EmptyUnwind>() {
            Ok(_) => Optional::Empty,
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

/// Swaps the nesting of an optional outcome into an outcome of an optional.
///
/// - `Present(Success(v))` becomes `Success(Present(v))`
/// - `Present(Failure(c))` becomes `Failure(c)`
/// - `Empty` becomes `Success(Empty)`
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, Outcome, optional};
///
/// let nested = Optional::Present(Outcome::Success(42));
/// assert_eq!(
///     optional::transpose(nested),
///     Outcome::Success(Optional::Present(42))
/// );
///
/// let empty: Optional<Outcome<i32>> = Optional::Empty;
/// assert_eq!(optional::transpose(empty), Outcome::Success(Optional::Empty));
/// ```
#[inline]
pub fn transpose<T>(input: Optional<Outcome<T>>) -> Outcome<Optional<T>> {
    match input {
        Optional::Present(Outcome::Success(value)) => Outcome::Success(Optional::Present(value)),
        Optional::Present(Outcome::Failure(cause)) => Outcome::Failure(cause),
        Optional::Empty => Outcome::Success(Optional::Empty),
    }
}

/// Collapses one level of optional nesting.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// let nested = Optional::Present(Optional::Present(42));
/// assert_eq!(optional::flatten(nested), Optional::Present(42));
///
/// let inner_empty: Optional<Optional<i32>> = Optional::Present(Optional::Empty);
/// assert_eq!(optional::flatten(inner_empty), Optional::Empty);
/// ```
#[inline]
pub fn flatten<T>(input: Optional<Optional<T>>) -> Optional<T> {
    input.unwrap_or(Optional::Empty)
}

/// Applies a function to the value if present, allowing the output type to
/// differ from the input.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// let length = optional::map(Optional::Present("hello"), |text| text.len());
/// assert_eq!(length, Optional::Present(5));
/// ```
#[inline]
pub fn map<T, U, F>(input: Optional<T>, function: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match input {
        Optional::Present(value) => Optional::Present(function(value)),
        Optional::Empty => Optional::Empty,
    }
}

/// Folds to a plain value of a possibly different type.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// assert_eq!(optional::map_or(Optional::Present(21), 0, |value| value * 2), 42);
/// assert_eq!(optional::map_or(Optional::<i32>::Empty, 0, |value| value * 2), 0);
/// ```
#[inline]
pub fn map_or<T, U, F>(input: Optional<T>, default: U, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    match input {
        Optional::Present(value) => function(value),
        Optional::Empty => default,
    }
}

/// Folds to a plain value with a lazily computed default.
#[inline]
pub fn map_or_else<T, U, D, F>(input: Optional<T>, default_function: D, function: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    match input {
        Optional::Present(value) => function(value),
        Optional::Empty => default_function(),
    }
}

/// Pairs two optionals of possibly different value types.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// let pair = optional::zip(Optional::Present(1), Optional::Present("one"));
/// assert_eq!(pair, Optional::Present((1, "one")));
///
/// let missing = optional::zip(Optional::Present(1), Optional::<&str>::Empty);
/// assert_eq!(missing, Optional::Empty);
/// ```
#[inline]
pub fn zip<A, B>(first: Optional<A>, second: Optional<B>) -> Optional<(A, B)> {
    match (first, second) {
        (Optional::Present(first), Optional::Present(second)) => {
            Optional::Present((first, second))
        }
        _ => Optional::Empty,
    }
}

/// Combines two optionals of possibly different value types with a function.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// let label = optional::zip_with(
///     Optional::Present("answer"),
///     Optional::Present(42),
///     |name, value| format!("{name}={value}"),
/// );
/// assert_eq!(label, Optional::Present("answer=42".to_string()));
/// ```
#[inline]
pub fn zip_with<A, B, C, F>(first: Optional<A>, second: Optional<B>, function: F) -> Optional<C>
where
    F: FnOnce(A, B) -> C,
{
    match (first, second) {
        (Optional::Present(first), Optional::Present(second)) => {
            Optional::Present(function(first, second))
        }
        _ => Optional::Empty,
    }
}

/// Returns `second` if `first` is present, otherwise `Empty`.
///
/// The heterogeneous counterpart of [`Optional::and`].
#[inline]
pub fn and<A, B>(first: Optional<A>, second: Optional<B>) -> Optional<B> {
    match first {
        Optional::Present(_) => second,
        Optional::Empty => Optional::Empty,
    }
}

/// Chains a computation whose optional output type differs from the input.
///
/// # Examples
///
/// ```rust
/// use optcome::{Optional, optional};
///
/// fn name_of(value: i32) -> Optional<&'static str> {
///     match value {
///         1 => Optional::Present("one"),
///         _ => Optional::Empty,
///     }
/// }
///
/// assert_eq!(optional::and_then(Optional::Present(1), name_of), Optional::Present("one"));
/// assert_eq!(optional::and_then(Optional::Present(2), name_of), Optional::Empty);
/// assert_eq!(optional::and_then(Optional::Empty, name_of), Optional::Empty);
/// ```
#[inline]
pub fn and_then<A, B, F>(first: Optional<A>, function: F) -> Optional<B>
where
    F: FnOnce(A) -> Optional<B>,
{
    match first {
        Optional::Present(value) => function(value),
        Optional::Empty => Optional::Empty,
    }
}

/// Bridges a "value plus absent-on-success cause" pair into an `Optional`.
///
/// A `None` cause means the value stands; any cause at all discards it.
///
/// # Examples
///
/// ```rust
/// use optcome::{Cause, Optional, optional};
///
/// assert_eq!(optional::from_pair(123, None), Optional::Present(123));
/// assert_eq!(
///     optional::from_pair(0, Some(Cause::message("lookup failed"))),
///     Optional::Empty
/// );
/// ```
#[inline]
pub fn from_pair<T>(value: T, cause: Option<Cause>) -> Optional<T> {
    match cause {
        None => Optional::Present(value),
        Some(_) => Optional::Empty,
    }
}
