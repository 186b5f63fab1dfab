use super::{Equality, verified};
use crate::typeclass::{Kind, SemiProduct};

lambda_harness! {
    /// Laws of [`SemiProduct`].
    ///
    /// - associativity: `product(product(fa, fb), fc)` and
    ///   `product(fa, product(fb, fc))` agree once the nested pairs are
    ///   regrouped as `(a, (b, c))`
    SemiProductLaws
}

impl<F: SemiProduct, S, R, O, E> SemiProductLaws<F, S, R, O, E> {
    /// Pairing may be regrouped.
    #[track_caller]
    pub fn associativity<A, B, C>(
        &self,
        fa: Kind<F, R, O, E, A>,
        fb: Kind<F, R, O, E, B>,
        fc: Kind<F, R, O, E, C>,
    ) where
        Kind<F, R, O, E, A>: Clone,
        Kind<F, R, O, E, B>: Clone,
        Kind<F, R, O, E, C>: Clone,
        S: Equality<Kind<F, R, O, E, (A, (B, C))>>,
    {
        let left_nested = F::product::<R, O, E, (A, B), C>(
            F::product::<R, O, E, A, B>(fa.clone(), fb.clone()),
            fc.clone(),
        );
        let regrouped = F::imap::<R, O, E, ((A, B), C), (A, (B, C)), _, _>(
            left_nested,
            |((a, b), c)| (a, (b, c)),
            |(a, (b, c))| ((a, b), c),
        );
        let right_nested = F::product::<R, O, E, A, (B, C)>(fa, F::product::<R, O, E, B, C>(fb, fc));
        self.equality.assert_equal("semi_product associativity", &regrouped, &right_nested);
        verified("SemiProduct", "associativity");
    }
}
