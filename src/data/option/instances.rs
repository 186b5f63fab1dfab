//! Type class instances for [`Option`].

use super::Option;
use crate::typeclass::{
    Covariant, FlatMap, Foldable, Invariant, Kind, Monoid, Of, Product, SemiProduct, Semigroup,
    TypeLambda, imap_from_map,
};

/// Type lambda for [`Option`].
///
/// Only the `Target` slot is used; `In`, `Out2` and `Out1` are ignored, so
/// `Kind<OptionTypeLambda, R, O, E, A>` is `Option<A>` for any `R`, `O`, `E`.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::{Covariant, FlatMap, Of};
///
/// let lifted = OptionTypeLambda::of::<(), (), (), _>(1);
/// let mapped = OptionTypeLambda::map::<(), (), (), _, _, _>(lifted, |n: i32| n + 1);
/// let chained = OptionTypeLambda::flat_map::<(), (), (), _, _, _>(mapped, |n: i32| {
///     if n > 1 { Option::some(n) } else { Option::none() }
/// });
/// assert_eq!(chained, Option::some(2));
/// ```
pub enum OptionTypeLambda {}

impl TypeLambda for OptionTypeLambda {
    type Type<In, Out2, Out1, Target> = Option<Target>;
}

impl Invariant for OptionTypeLambda {
    fn imap<R, O, E, A, B, Forward, Backward>(
        fa: Kind<Self, R, O, E, A>,
        to: Forward,
        from: Backward,
    ) -> Kind<Self, R, O, E, B>
    where
        Forward: FnMut(A) -> B,
        Backward: FnMut(B) -> A,
    {
        imap_from_map::<Self, R, O, E, A, B, Forward, Backward>(fa, to, from)
    }
}

impl Covariant for OptionTypeLambda {
    fn map<R, O, E, A, B, Function>(
        fa: Kind<Self, R, O, E, A>,
        function: Function,
    ) -> Kind<Self, R, O, E, B>
    where
        Function: FnMut(A) -> B,
    {
        fa.map(function)
    }
}

impl Of for OptionTypeLambda {
    fn of<R, O, E, A>(value: A) -> Kind<Self, R, O, E, A> {
        Option::of(value)
    }
}

impl FlatMap for OptionTypeLambda {
    fn flat_map<R, O, E, A, B, Function>(
        fa: Kind<Self, R, O, E, A>,
        function: Function,
    ) -> Kind<Self, R, O, E, B>
    where
        Function: FnMut(A) -> Kind<Self, R, O, E, B>,
    {
        fa.flat_map(function)
    }
}

impl SemiProduct for OptionTypeLambda {
    fn product<R, O, E, A, B>(
        fa: Kind<Self, R, O, E, A>,
        that: Kind<Self, R, O, E, B>,
    ) -> Kind<Self, R, O, E, (A, B)> {
        fa.product(that)
    }

    fn product_many<R, O, E, A, Collection>(
        fa: Kind<Self, R, O, E, A>,
        collection: Collection,
    ) -> Kind<Self, R, O, E, Vec<A>>
    where
        Collection: IntoIterator<Item = Kind<Self, R, O, E, A>>,
    {
        fa.product_many(collection)
    }
}

impl Product for OptionTypeLambda {
    fn product_all<R, O, E, A, Collection>(collection: Collection) -> Kind<Self, R, O, E, Vec<A>>
    where
        Collection: IntoIterator<Item = Kind<Self, R, O, E, A>>,
    {
        Option::product_all(collection)
    }
}

impl Foldable for OptionTypeLambda {
    fn reduce<R, O, E, A, B, Function>(fa: Kind<Self, R, O, E, A>, seed: B, function: Function) -> B
    where
        Function: FnMut(B, A) -> B,
    {
        fa.reduce(seed, function)
    }
}

/// `Some` values combine their payloads; `None` is skipped.
impl<A: Semigroup> Semigroup for Option<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

/// `None` is the identity element.
impl<A: Semigroup> Monoid for Option<A> {
    fn empty() -> Self {
        Self::None
    }
}
