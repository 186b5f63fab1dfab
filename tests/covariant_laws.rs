//! Property-based tests for the Covariant and Invariant laws of `Option`.
//!
//! - **Identity Law**: `map(fa, |x| x) == fa`
//! - **Composition Law**: `map(map(fa, f), g) == map(fa, |x| g(f(x)))`
//! - **Invariant Identity/Composition**: the same, with paired functions

use hkt_std::data::option::{Option, OptionTypeLambda};
use hkt_std::laws::{CovariantLaws, InvariantLaws};
use proptest::prelude::*;

fn option_of<T: std::fmt::Debug>(
    strategy: impl Strategy<Value = T>,
) -> impl Strategy<Value = Option<T>> {
    prop::option::of(strategy).prop_map(Option::from)
}

const COVARIANT: CovariantLaws<OptionTypeLambda> = CovariantLaws::new();
const INVARIANT: InvariantLaws<OptionTypeLambda> = InvariantLaws::new();

// =============================================================================
// Covariant
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_covariant_identity(value in option_of(any::<i32>())) {
        COVARIANT.identity(value);
    }

    /// Identity Law for Option<String>
    #[test]
    fn prop_covariant_string_identity(value in option_of(any::<String>())) {
        COVARIANT.identity(value);
    }

    /// Composition Law for Option<i32>
    #[test]
    fn prop_covariant_composition(value in option_of(any::<i32>())) {
        COVARIANT.composition(value, |n: i32| n.wrapping_add(1), |n: i32| n.wrapping_mul(2));
    }

    /// Composition Law changing the payload type
    #[test]
    fn prop_covariant_composition_across_types(value in option_of(any::<String>())) {
        COVARIANT.composition(value, |s: String| s.len(), |n: usize| n % 7 == 0);
    }
}

// =============================================================================
// Invariant
// =============================================================================

proptest! {
    /// Identity Law for Option<u64>
    #[test]
    fn prop_invariant_identity(value in option_of(any::<u64>())) {
        INVARIANT.identity(value);
    }

    /// Composition Law through isomorphic representations
    #[test]
    fn prop_invariant_composition(value in option_of(any::<i32>())) {
        INVARIANT.composition(
            value,
            |n: i32| i64::from(n),
            |n: i64| i32::try_from(n).unwrap_or_default(),
            |n: i64| n.to_string(),
            |s: String| s.parse().unwrap_or_default(),
        );
    }
}

#[test]
fn covariant_derived_operations() {
    use hkt_std::typeclass::Covariant;

    assert_eq!(OptionTypeLambda::void::<(), (), (), _>(Option::some(9)), Option::some(()));
    let functions = Option::some(|n: i32| n * 10);
    assert_eq!(OptionTypeLambda::flap::<(), (), (), _, _, _>(functions, 4), Option::some(40));
}
