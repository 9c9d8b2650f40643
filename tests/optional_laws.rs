//! Property-based tests for the `Optional` algebra.
//!
//! Verifies the algebraic contracts across randomly generated values:
//!
//! - **Extraction**: `Present(v).unwrap_or(d) == v`, `Empty.unwrap_or(d) == d`
//! - **Map/unwrap commutation**: `Present(v).map(f).unwrap_or(d) == f(v)`
//! - **Boolean laws**: `xor` annihilates two present values, `and`/`or`
//!   short-circuit on the deciding side
//! - **Transpose involution**: swapping nesting twice is the identity in all
//!   three populated shapes

use optcome::{Cause, Optional, Outcome, optional, outcome};
use proptest::prelude::*;

fn any_optional() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![any::<i32>().prop_map(Optional::Present), Just(Optional::Empty)]
}

fn any_optional_outcome() -> impl Strategy<Value = Optional<Outcome<i32>>> {
    prop_oneof![
        any::<i32>().prop_map(|value| Optional::Present(Outcome::Success(value))),
        any::<String>().prop_map(|text| Optional::Present(Outcome::Failure(Cause::message(text)))),
        Just(Optional::Empty),
    ]
}

// =============================================================================
// Extraction Laws
// =============================================================================

proptest! {
    /// `unwrap_or` returns the value when present, the default otherwise.
    #[test]
    fn prop_unwrap_or(value in any::<i32>(), default in any::<i32>()) {
        prop_assert_eq!(Optional::Present(value).unwrap_or(default), value);
        prop_assert_eq!(Optional::Empty.unwrap_or(default), default);
    }

    /// `unwrap_or_else` agrees with `unwrap_or` for a constant default.
    #[test]
    fn prop_unwrap_or_else_agrees_with_unwrap_or(
        optional in any_optional(),
        default in any::<i32>(),
    ) {
        prop_assert_eq!(
            optional.unwrap_or_else(|| default),
            optional.unwrap_or(default)
        );
    }
}

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    /// Mapping then unwrapping commutes with applying the function directly.
    #[test]
    fn prop_map_unwrap_commutes(value in any::<i32>(), default in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(
            Optional::Present(value).map(function).unwrap_or(default),
            function(value)
        );
        prop_assert_eq!(Optional::Empty.map(function).unwrap_or(default), default);
    }

    /// Mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity(optional in any_optional()) {
        prop_assert_eq!(optional.map(|value| value), optional);
    }

    /// The bound and unbound maps agree when the types happen to match.
    #[test]
    fn prop_bound_and_unbound_map_agree(optional in any_optional()) {
        let function = |n: i32| n.wrapping_add(1);
        prop_assert_eq!(optional.map(function), optional::map(optional, function));
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// Filtering matches direct case analysis on the predicate.
    #[test]
    fn prop_filter_is_case_analysis(value in any::<i32>()) {
        let positive = |candidate: &i32| *candidate > 0;

        let expected = if value > 0 {
            Optional::Present(value)
        } else {
            Optional::Empty
        };
        prop_assert_eq!(Optional::Present(value).filter(positive), expected);
        prop_assert_eq!(Optional::<i32>::Empty.filter(positive), Optional::Empty);
    }
}

// =============================================================================
// Boolean Laws
// =============================================================================

proptest! {
    /// Two present values annihilate under `xor`; one survives alone.
    #[test]
    fn prop_xor_laws(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(
            Optional::Present(first).xor(Optional::Present(second)),
            Optional::Empty
        );
        prop_assert_eq!(
            Optional::Present(first).xor(Optional::Empty),
            Optional::Present(first)
        );
        prop_assert_eq!(
            Optional::Empty.xor(Optional::Present(second)),
            Optional::Present(second)
        );
    }

    /// `Empty` is absorbing for `and` and neutral for `or`.
    #[test]
    fn prop_and_or_identities(optional in any_optional()) {
        prop_assert_eq!(Optional::Empty.and(optional), Optional::Empty);
        prop_assert_eq!(Optional::Empty.or(optional), optional);
        prop_assert_eq!(optional.or(Optional::Empty), optional);
    }
}

// =============================================================================
// Nesting Laws
// =============================================================================

proptest! {
    /// Transposing twice restores the original nesting.
    #[test]
    fn prop_transpose_involution(nested in any_optional_outcome()) {
        let round_tripped = outcome::transpose(optional::transpose(nested.clone()));
        prop_assert_eq!(round_tripped, nested);
    }

    /// Flattening a once-wrapped optional recovers it.
    #[test]
    fn prop_flatten_inverts_wrapping(optional in any_optional()) {
        prop_assert_eq!(optional::flatten(Optional::Present(optional)), optional);
    }
}

// =============================================================================
// Pair Bridging Laws
// =============================================================================

proptest! {
    /// `from_pair` keeps the value exactly when no cause is given.
    #[test]
    fn prop_from_pair(value in any::<i32>(), text in any::<String>()) {
        prop_assert_eq!(optional::from_pair(value, None), Optional::Present(value));
        prop_assert_eq!(
            optional::from_pair(value, Some(Cause::message(text))),
            Optional::Empty
        );
    }
}
