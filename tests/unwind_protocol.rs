//! Integration tests for the unwind short-circuit protocol.
//!
//! These tests pin down the protocol's one hard guarantee: a `catch` scope
//! recovers exactly the aborts its own type's `unwrap_or_abort` raised, and
//! re-escalates every other unwind with the payload untouched — message
//! aborts from `expect`, the other type's abort signal, and unrelated
//! panics alike.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use optcome::{Cause, Optional, Outcome, optional, outcome};
use rstest::rstest;

/// Runs a closure that is expected to unwind and returns the panic payload.
fn captured_panic<R>(body: impl FnOnce() -> R) -> Box<dyn Any + Send> {
    catch_unwind(AssertUnwindSafe(|| {
        let _ = body();
    }))
    .expect_err("the closure should have unwound")
}

/// A scope exercising the Optional side of the protocol.
///
/// Mirrors the intended usage: one guard at the function boundary, abort
/// extractions anywhere beneath it.
fn optional_scope(condition: u32) -> Optional<i32> {
    optional::catch(|| match condition {
        0 => {
            Optional::<String>::Empty.unwrap_or_abort();
            unreachable!()
        }
        1 => {
            Optional::<String>::Empty.expect("expect panic");
            unreachable!()
        }
        2 => panic!("raw panic"),
        _ => {
            let threaded = Optional::Present("text".to_string()).unwrap_or_abort();
            assert_eq!(threaded, "text");
            Optional::Present(123)
        }
    })
}

/// The Outcome counterpart of [`optional_scope`].
fn outcome_scope(condition: u32, cause: &Cause) -> Outcome<i32> {
    outcome::catch(|| match condition {
        0 => {
            Outcome::<String>::Failure(cause.clone()).unwrap_or_abort();
            unreachable!()
        }
        1 => {
            Outcome::<String>::Failure(cause.clone()).expect("expect panic");
            unreachable!()
        }
        2 => panic!("raw panic"),
        _ => {
            let threaded = Outcome::Success("text".to_string()).unwrap_or_abort();
            assert_eq!(threaded, "text");
            Outcome::Success(123)
        }
    })
}

// =============================================================================
// Recovery of the Protocol's Own Signals
// =============================================================================

#[rstest]
fn test_optional_catch_recovers_empty_abort() {
    assert_eq!(optional_scope(0), Optional::Empty);
}

#[rstest]
fn test_optional_catch_passes_normal_returns_through() {
    assert_eq!(optional_scope(3), Optional::Present(123));
}

#[rstest]
fn test_outcome_catch_recovers_failure_abort_with_same_cause() {
    let cause = Cause::message("lookup failed");

    match outcome_scope(0, &cause) {
        Outcome::Failure(recovered) => assert!(recovered.ptr_eq(&cause)),
        Outcome::Success(_) => panic!("the failure abort should have been recovered"),
    }
}

#[rstest]
fn test_outcome_catch_passes_normal_returns_through() {
    let cause = Cause::message("unused");
    assert_eq!(outcome_scope(3, &cause), Outcome::Success(123));
}

// =============================================================================
// Escalation of Message Aborts and Unrelated Panics
// =============================================================================

#[rstest]
fn test_optional_catch_escalates_expect_with_the_message_payload() {
    let payload = captured_panic(|| optional_scope(1));
    let message = payload
        .downcast::<String>()
        .expect("an `expect` abort carries its formatted message");
    assert_eq!(*message, "expect panic");
}

#[rstest]
fn test_optional_catch_escalates_raw_panics_untouched() {
    let payload = captured_panic(|| optional_scope(2));
    let message = payload
        .downcast::<&str>()
        .expect("a literal panic carries its static message");
    assert_eq!(*message, "raw panic");
}

#[rstest]
fn test_outcome_catch_escalates_expect_with_cause_annotation() {
    let cause = Cause::message("lookup failed");
    let payload = captured_panic(|| outcome_scope(1, &cause));
    let message = payload
        .downcast::<String>()
        .expect("an `expect` abort carries its formatted message");
    assert_eq!(*message, format!("expect panic: {cause}"));
}

#[rstest]
fn test_outcome_catch_escalates_raw_panics_untouched() {
    let cause = Cause::message("unused");
    let payload = captured_panic(|| outcome_scope(2, &cause));
    let message = payload
        .downcast::<&str>()
        .expect("a literal panic carries its static message");
    assert_eq!(*message, "raw panic");
}

#[rstest]
fn test_expect_failure_on_success_escalates() {
    let payload = captured_panic(|| {
        outcome::catch(|| -> Outcome<i32> {
            Outcome::Success(123).expect_failure("expected a failure");
            unreachable!()
        })
    });
    let message = payload
        .downcast::<String>()
        .expect("a wrong-variant extraction carries a plain diagnostic");
    assert_eq!(*message, "expected a failure");
}

#[rstest]
fn test_unwrap_failure_or_abort_on_success_escalates() {
    let payload = captured_panic(|| {
        outcome::catch(|| -> Outcome<i32> {
            Outcome::Success(123).unwrap_failure_or_abort();
            unreachable!()
        })
    });
    let message = payload
        .downcast::<&str>()
        .expect("a wrong-variant extraction carries a plain diagnostic");
    assert_eq!(
        *message,
        "called `Outcome::unwrap_failure_or_abort()` on a `Success` value"
    );
}

// =============================================================================
// Cross-Type Escalation
// =============================================================================

#[rstest]
fn test_optional_catch_does_not_recognize_failure_aborts() {
    let cause = Cause::message("lookup failed");

    // The inner Optional guard must let the failure abort pass; the outer
    // Outcome guard then recovers it with the cause intact.
    let recovered: Outcome<i32> = outcome::catch(|| {
        optional::catch(|| -> Optional<i32> {
            Outcome::<i32>::Failure(cause.clone()).unwrap_or_abort();
            unreachable!()
        });
        unreachable!()
    });

    match recovered {
        Outcome::Failure(surviving) => assert!(surviving.ptr_eq(&cause)),
        Outcome::Success(_) => panic!("the failure abort should have crossed the Optional guard"),
    }
}

#[rstest]
fn test_outcome_catch_does_not_recognize_empty_aborts() {
    let recovered: Optional<i32> = optional::catch(|| {
        outcome::catch(|| -> Outcome<i32> {
            Optional::<i32>::Empty.unwrap_or_abort();
            unreachable!()
        });
        unreachable!()
    });

    assert_eq!(recovered, Optional::Empty);
}

// =============================================================================
// Narrow Recognition
// =============================================================================

/// Same shape as the private empty-abort marker, but a foreign type.
struct LooksLikeEmptySignal;

/// Same shape as the private failure-abort marker, but a foreign type.
struct LooksLikeFailureSignal(Cause);

#[rstest]
fn test_foreign_unit_struct_payload_is_not_recognized() {
    let payload = captured_panic(|| {
        optional::catch(|| -> Optional<i32> { panic_any(LooksLikeEmptySignal) })
    });
    assert!(payload.downcast::<LooksLikeEmptySignal>().is_ok());
}

#[rstest]
fn test_foreign_cause_carrying_payload_is_not_recognized() {
    let cause = Cause::message("foreign");
    let payload = captured_panic(|| {
        outcome::catch(|| -> Outcome<i32> { panic_any(LooksLikeFailureSignal(cause.clone())) })
    });

    let foreign = payload
        .downcast::<LooksLikeFailureSignal>()
        .expect("the foreign payload must escape untouched");
    assert!(foreign.0.ptr_eq(&cause));
}

// =============================================================================
// Scope Discipline
// =============================================================================

#[rstest]
fn test_inner_guard_recovery_is_invisible_to_the_outer_scope() {
    let result = optional::catch(|| {
        let inner: Optional<i32> = optional::catch(|| {
            Optional::<i32>::Empty.unwrap_or_abort();
            unreachable!()
        });
        assert_eq!(inner, Optional::Empty);
        Optional::Present(7)
    });

    assert_eq!(result, Optional::Present(7));
}

#[rstest]
fn test_abort_crosses_unguarded_helper_functions() {
    fn helper() -> i32 {
        Optional::<i32>::Empty.unwrap_or_abort()
    }

    let result = optional::catch(|| Optional::Present(helper() + 1));
    assert_eq!(result, Optional::Empty);
}

#[rstest]
fn test_catch_recognizes_aborts_across_value_types() {
    // The empty marker is type-erased: a guard declared for one value type
    // recovers an abort raised while extracting a different value type.
    let result: Optional<&'static str> = optional::catch(|| {
        Optional::<Vec<u8>>::Empty.unwrap_or_abort();
        unreachable!()
    });
    assert_eq!(result, Optional::Empty);
}
