//! Unwind signal protocol - the short-circuit channel behind `unwrap_or_abort`.
//!
//! An abort raised by [`Optional::unwrap_or_abort`](crate::Optional::unwrap_or_abort)
//! or [`Outcome::unwrap_or_abort`](crate::Outcome::unwrap_or_abort) travels
//! up the stack as an ordinary panic whose payload is one of the private
//! marker types defined here. The paired guards
//! ([`optional::catch`](crate::optional::catch) and
//! [`outcome::catch`](crate::outcome::catch)) intercept a propagating panic
//! and inspect its payload with an exact `downcast` type test:
//!
//! - [`EmptyUnwind`] is converted back into `Optional::Empty`
//! - [`FailureUnwind`] is converted back into `Outcome::Failure`, carrying
//!   the same [`Cause`] allocation that was thrown
//! - anything else is re-raised untouched with `resume_unwind`
//!
//! The panic channel is shared with every other use of panics in the
//! program, so recognition must never rely on payload *content* or loose
//! structural shape: a message panic from `expect`, an assertion failure, or
//! an unrelated fault passing through a guard is always escalated with its
//! payload intact. Because the marker types are private to this crate, no
//! foreign payload can ever satisfy the type test.
//!
//! The protocol is stack-scoped and per-thread; a guard only affects the
//! call stack beneath it. Note that a recovered abort still passes through
//! the global panic hook before the guard sees it, so programs that treat
//! recovered aborts as routine may want a quieter hook.

use std::panic::panic_any;

use crate::cause::Cause;

/// Marker payload for an abort raised by `unwrap_or_abort` on `Empty`.
///
/// Recognized only by [`optional::catch`](crate::optional::catch).
pub(crate) struct EmptyUnwind;

/// Marker payload for an abort raised by `unwrap_or_abort` on `Failure`.
///
/// Recognized only by [`outcome::catch`](crate::outcome::catch), which
/// extracts the carried cause.
pub(crate) struct FailureUnwind {
    pub(crate) cause: Cause,
}

// `panic_any` requires an `Any + Send` payload; these assertions keep the
// markers eligible if their definitions ever change.
static_assertions::assert_impl_all!(EmptyUnwind: Send);
static_assertions::assert_impl_all!(FailureUnwind: Send);

/// Raises the recognizable empty-abort signal.
pub(crate) fn abort_empty() -> ! {
    panic_any(EmptyUnwind)
}

/// Raises the recognizable failure-abort signal carrying `cause`.
pub(crate) fn abort_failure(cause: Cause) -> ! {
    panic_any(FailureUnwind { cause })
}
