//! Property-based tests for the Semigroup and Monoid laws.
//!
//! - **Associativity**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
//! - **Identity**: `empty().combine(a) == a == a.combine(empty())`

use hkt_std::data::option::Option;
use hkt_std::laws::{EqualBy, MonoidLaws, SemigroupLaws};
use hkt_std::typeclass::{Max, Min, Sum};
use proptest::prelude::*;

fn option_of<T: std::fmt::Debug>(
    strategy: impl Strategy<Value = T>,
) -> impl Strategy<Value = Option<T>> {
    prop::option::of(strategy).prop_map(Option::from)
}

// =============================================================================
// Plain value types
// =============================================================================

proptest! {
    #[test]
    fn prop_string_associativity(a in "\\PC{0,8}", b in "\\PC{0,8}", c in "\\PC{0,8}") {
        SemigroupLaws::<String>::new().associativity(a, b, c);
    }

    #[test]
    fn prop_sum_associativity(a in -1_000_i64..1_000, b in -1_000_i64..1_000, c in -1_000_i64..1_000) {
        SemigroupLaws::<Sum<i64>>::new().associativity(Sum(a), Sum(b), Sum(c));
    }

    #[test]
    fn prop_max_min_monoid_identity(value: i32) {
        MonoidLaws::<Max<i32>>::new().left_identity(Max(value));
        MonoidLaws::<Min<i32>>::new().right_identity(Min(value));
    }

    #[test]
    fn prop_pair_associativity(a: (u8, bool), b: (u8, bool), c: (u8, bool)) {
        let wrap = |(n, _): (u8, bool)| (Max(n), vec![n]);
        SemigroupLaws::<(Max<u8>, Vec<u8>)>::new().associativity(wrap(a), wrap(b), wrap(c));
    }
}

// =============================================================================
// Option<A: Semigroup>
// =============================================================================

proptest! {
    #[test]
    fn prop_option_associativity(
        a in option_of(any::<String>()),
        b in option_of(any::<String>()),
        c in option_of(any::<String>()),
    ) {
        SemigroupLaws::<Option<String>>::new().associativity(a, b, c);
    }

    #[test]
    fn prop_option_none_is_identity(value in option_of(-100_i32..100).prop_map(|o| o.map(Sum))) {
        let laws = MonoidLaws::<Option<Sum<i32>>>::new();
        laws.left_identity(value);
        laws.right_identity(value);
    }

    /// A custom equality strategy sees both sides of each law
    #[test]
    fn prop_option_associativity_by_length(
        a in option_of("[a-z]{0,4}"),
        b in option_of("[a-z]{0,4}"),
        c in option_of("[a-z]{0,4}"),
    ) {
        let same_length = EqualBy(|left: &Option<String>, right: &Option<String>| {
            left.equals_with(right, |x, y| x.len() == y.len())
        });
        SemigroupLaws::<Option<String>, _>::with_equality(same_length).associativity(a, b, c);
    }
}
