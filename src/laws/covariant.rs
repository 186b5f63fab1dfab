use super::{Equality, verified};
use crate::typeclass::{Covariant, Kind};

lambda_harness! {
    /// Laws of [`Covariant`].
    ///
    /// - identity: `map(fa, |a| a) == fa`
    /// - composition: `map(map(fa, f), g) == map(fa, |a| g(f(a)))`
    CovariantLaws
}

impl<F: Covariant, S, R, O, E> CovariantLaws<F, S, R, O, E> {
    /// Mapping the identity function changes nothing.
    #[track_caller]
    pub fn identity<A>(&self, fa: Kind<F, R, O, E, A>)
    where
        Kind<F, R, O, E, A>: Clone,
        S: Equality<Kind<F, R, O, E, A>>,
    {
        let mapped = F::map::<R, O, E, A, A, _>(fa.clone(), |value| value);
        self.equality.assert_equal("covariant identity", &mapped, &fa);
        verified("Covariant", "identity");
    }

    /// Mapping twice equals mapping the composed function once.
    #[track_caller]
    pub fn composition<A, B, C, First, Second>(
        &self,
        fa: Kind<F, R, O, E, A>,
        first: First,
        second: Second,
    ) where
        Kind<F, R, O, E, A>: Clone,
        S: Equality<Kind<F, R, O, E, C>>,
        First: Fn(A) -> B,
        Second: Fn(B) -> C,
    {
        let stepwise =
            F::map::<R, O, E, B, C, _>(F::map::<R, O, E, A, B, _>(fa.clone(), &first), &second);
        let composed = F::map::<R, O, E, A, C, _>(fa, |value| second(first(value)));
        self.equality.assert_equal("covariant composition", &stepwise, &composed);
        verified("Covariant", "composition");
    }
}
