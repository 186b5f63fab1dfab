use super::{Equality, verified};
use crate::typeclass::{Invariant, Kind};

lambda_harness! {
    /// Laws of [`Invariant`].
    ///
    /// - identity: `imap(fa, id, id) == fa`
    /// - composition:
    ///   `imap(imap(fa, f1, f2), g1, g2) == imap(fa, g1 . f1, f2 . g2)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Option, OptionTypeLambda};
    /// use hkt_std::laws::InvariantLaws;
    ///
    /// let laws = InvariantLaws::<OptionTypeLambda>::new();
    /// laws.composition(
    ///     Option::some(3_i64),
    ///     |n: i64| n.to_string(),
    ///     |s: String| s.parse().unwrap_or_default(),
    ///     |s: String| s.len(),
    ///     |n: usize| "x".repeat(n),
    /// );
    /// ```
    InvariantLaws
}

impl<F: Invariant, S, R, O, E> InvariantLaws<F, S, R, O, E> {
    /// Mapping with the identity in both directions changes nothing.
    #[track_caller]
    pub fn identity<A>(&self, fa: Kind<F, R, O, E, A>)
    where
        Kind<F, R, O, E, A>: Clone,
        S: Equality<Kind<F, R, O, E, A>>,
    {
        let mapped = F::imap::<R, O, E, A, A, _, _>(fa.clone(), |value| value, |value| value);
        self.equality.assert_equal("invariant identity", &mapped, &fa);
        verified("Invariant", "identity");
    }

    /// Two bidirectional mappings equal one mapping by the composed pairs.
    #[track_caller]
    pub fn composition<A, B, C, ForwardFirst, BackwardFirst, ForwardSecond, BackwardSecond>(
        &self,
        fa: Kind<F, R, O, E, A>,
        forward_first: ForwardFirst,
        backward_first: BackwardFirst,
        forward_second: ForwardSecond,
        backward_second: BackwardSecond,
    ) where
        Kind<F, R, O, E, A>: Clone,
        S: Equality<Kind<F, R, O, E, C>>,
        ForwardFirst: Fn(A) -> B,
        BackwardFirst: Fn(B) -> A,
        ForwardSecond: Fn(B) -> C,
        BackwardSecond: Fn(C) -> B,
    {
        let stepwise = F::imap::<R, O, E, B, C, _, _>(
            F::imap::<R, O, E, A, B, _, _>(fa.clone(), &forward_first, &backward_first),
            &forward_second,
            &backward_second,
        );
        let composed = F::imap::<R, O, E, A, C, _, _>(
            fa,
            |value| forward_second(forward_first(value)),
            |value| backward_first(backward_second(value)),
        );
        self.equality.assert_equal("invariant composition", &stepwise, &composed);
        verified("Invariant", "composition");
    }
}
