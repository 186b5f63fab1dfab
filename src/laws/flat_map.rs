use super::{Equality, verified};
use crate::typeclass::{FlatMap, Kind};

lambda_harness! {
    /// Laws of [`FlatMap`].
    ///
    /// - associativity:
    ///   `flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))`
    FlatMapLaws
}

impl<F: FlatMap, S, R, O, E> FlatMapLaws<F, S, R, O, E> {
    /// Nested binds may be regrouped.
    #[track_caller]
    pub fn associativity<A, B, C, First, Second>(
        &self,
        fa: Kind<F, R, O, E, A>,
        first: First,
        second: Second,
    ) where
        Kind<F, R, O, E, A>: Clone,
        S: Equality<Kind<F, R, O, E, C>>,
        First: Fn(A) -> Kind<F, R, O, E, B>,
        Second: Fn(B) -> Kind<F, R, O, E, C>,
    {
        check_associativity::<F, S, R, O, E, A, B, C, First, Second>(
            &self.equality,
            fa,
            first,
            second,
        );
        verified("FlatMap", "associativity");
    }
}

/// Asserts `flat_map` associativity; shared with the monad laws.
#[track_caller]
pub(super) fn check_associativity<F, S, R, O, E, A, B, C, First, Second>(
    equality: &S,
    fa: Kind<F, R, O, E, A>,
    first: First,
    second: Second,
) where
    F: FlatMap,
    Kind<F, R, O, E, A>: Clone,
    S: Equality<Kind<F, R, O, E, C>>,
    First: Fn(A) -> Kind<F, R, O, E, B>,
    Second: Fn(B) -> Kind<F, R, O, E, C>,
{
    let left_nested =
        F::flat_map::<R, O, E, B, C, _>(F::flat_map::<R, O, E, A, B, _>(fa.clone(), &first), &second);
    let right_nested = F::flat_map::<R, O, E, A, C, _>(fa, |value| {
        F::flat_map::<R, O, E, B, C, _>(first(value), &second)
    });
    equality.assert_equal("flat_map associativity", &left_nested, &right_nested);
}
