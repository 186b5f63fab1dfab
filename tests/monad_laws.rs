//! Property-based tests for the FlatMap and Monad laws of `Option`.
//!
//! - **Left Identity**: `flat_map(of(a), f) == f(a)`
//! - **Right Identity**: `flat_map(fa, of) == fa`
//! - **Associativity**: `flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))`

use hkt_std::data::option::{Option, OptionTypeLambda};
use hkt_std::laws::{FlatMapLaws, MonadLaws};
use hkt_std::typeclass::FlatMap;
use proptest::prelude::*;
use rstest::rstest;

fn option_of<T: std::fmt::Debug>(
    strategy: impl Strategy<Value = T>,
) -> impl Strategy<Value = Option<T>> {
    prop::option::of(strategy).prop_map(Option::from)
}

fn halve(n: i32) -> Option<i32> {
    if n % 2 == 0 { Option::some(n / 2) } else { Option::none() }
}

fn describe(n: i32) -> Option<String> {
    if n >= 0 { Option::some(format!("+{n}")) } else { Option::none() }
}

// =============================================================================
// Monad
// =============================================================================

proptest! {
    /// Left Identity Law
    #[test]
    fn prop_monad_left_identity(value: i32) {
        MonadLaws::<OptionTypeLambda>::new().left_identity(value, halve);
    }

    /// Right Identity Law
    #[test]
    fn prop_monad_right_identity(value in option_of(any::<i32>())) {
        MonadLaws::<OptionTypeLambda>::new().right_identity(value);
    }

    /// Associativity Law
    #[test]
    fn prop_monad_associativity(value in option_of(any::<i32>())) {
        MonadLaws::<OptionTypeLambda>::new().associativity(value, halve, describe);
    }

    /// Associativity Law for FlatMap alone
    #[test]
    fn prop_flat_map_associativity(value in option_of(any::<i32>())) {
        FlatMapLaws::<OptionTypeLambda>::new().associativity(value, halve, halve);
    }
}

// =============================================================================
// Derived operations
// =============================================================================

#[rstest]
#[case(Option::some(1), Option::some("next"), Option::some("next"))]
#[case(Option::none(), Option::some("next"), Option::none())]
#[case(Option::some(1), Option::none(), Option::none())]
fn and_then_keeps_the_second(
    #[case] first: Option<i32>,
    #[case] second: Option<&'static str>,
    #[case] expected: Option<&'static str>,
) {
    assert_eq!(OptionTypeLambda::and_then::<(), (), (), _, _>(first, second), expected);
}

#[rstest]
fn flatten_through_the_lambda_matches_the_method() {
    let nested = Option::some(Option::some(3));
    assert_eq!(OptionTypeLambda::flatten::<(), (), (), _>(nested), nested.flatten());
}
