use super::flat_map::check_associativity;
use super::{Equality, verified};
use crate::typeclass::{Kind, Monad};

lambda_harness! {
    /// Laws of [`Monad`].
    ///
    /// - left identity: `flat_map(of(a), f) == f(a)`
    /// - right identity: `flat_map(fa, of) == fa`
    /// - associativity, as for [`FlatMap`](crate::typeclass::FlatMap)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Option, OptionTypeLambda};
    /// use hkt_std::laws::MonadLaws;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Option::some(n / 2) } else { Option::none() };
    ///
    /// let laws = MonadLaws::<OptionTypeLambda>::new();
    /// laws.left_identity(8, half);
    /// laws.right_identity(Option::some(8));
    /// laws.associativity(Option::some(8), half, half);
    /// ```
    MonadLaws
}

impl<F: Monad, S, R, O, E> MonadLaws<F, S, R, O, E> {
    /// Binding a lifted value is applying the function.
    #[track_caller]
    pub fn left_identity<A, B, Function>(&self, value: A, function: Function)
    where
        A: Clone,
        S: Equality<Kind<F, R, O, E, B>>,
        Function: Fn(A) -> Kind<F, R, O, E, B>,
    {
        let bound = F::flat_map::<R, O, E, A, B, _>(F::of::<R, O, E, A>(value.clone()), &function);
        let applied = function(value);
        self.equality.assert_equal("monad left identity", &bound, &applied);
        verified("Monad", "left_identity");
    }

    /// Binding with `of` changes nothing.
    #[track_caller]
    pub fn right_identity<A>(&self, fa: Kind<F, R, O, E, A>)
    where
        Kind<F, R, O, E, A>: Clone,
        S: Equality<Kind<F, R, O, E, A>>,
    {
        let bound = F::flat_map::<R, O, E, A, A, _>(fa.clone(), F::of::<R, O, E, A>);
        self.equality.assert_equal("monad right identity", &bound, &fa);
        verified("Monad", "right_identity");
    }

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
        verified("Monad", "associativity");
    }
}
