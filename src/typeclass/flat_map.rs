//! `FlatMap` type class - sequencing dependent computations.
//!
//! `flat_map` runs a computation that itself produces a wrapped value and
//! collapses the result, so the second step can depend on the value produced
//! by the first.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))
//! ```

use super::higher::Kind;
use super::higher::TypeLambda;

/// A type class for type constructors supporting dependent sequencing.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::FlatMap;
///
/// let halve = |n: i32| if n % 2 == 0 { Option::some(n / 2) } else { Option::none() };
///
/// assert_eq!(OptionTypeLambda::flat_map::<(), (), (), _, _, _>(Option::some(8), halve), Option::some(4));
/// assert_eq!(OptionTypeLambda::flat_map::<(), (), (), _, _, _>(Option::some(3), halve), Option::none());
/// ```
pub trait FlatMap: TypeLambda {
    /// Applies `function` to the value(s) in the target slot and collapses
    /// the resulting nesting.
    fn flat_map<R, O, E, A, B, Function>(
        fa: Kind<Self, R, O, E, A>,
        function: Function,
    ) -> Kind<Self, R, O, E, B>
    where
        Function: FnMut(A) -> Kind<Self, R, O, E, B>;

    /// Collapses one level of nesting.
    ///
    /// This is `flat_map(ffa, |fa| fa)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Option, OptionTypeLambda};
    /// use hkt_std::typeclass::FlatMap;
    ///
    /// let nested = Option::some(Option::some(1));
    /// assert_eq!(OptionTypeLambda::flatten::<(), (), (), _>(nested), Option::some(1));
    /// ```
    #[inline]
    fn flatten<R, O, E, A>(
        ffa: Kind<Self, R, O, E, Kind<Self, R, O, E, A>>,
    ) -> Kind<Self, R, O, E, A> {
        Self::flat_map::<R, O, E, Kind<Self, R, O, E, A>, A, _>(ffa, |fa| fa)
    }

    /// Sequences two computations, keeping the result of the second.
    ///
    /// `that` is only returned when `fa` produced a value; an empty `fa`
    /// propagates.
    #[inline]
    fn and_then<R, O, E, A, B>(
        fa: Kind<Self, R, O, E, A>,
        that: Kind<Self, R, O, E, B>,
    ) -> Kind<Self, R, O, E, B>
    where
        Kind<Self, R, O, E, B>: Clone,
    {
        Self::flat_map::<R, O, E, A, B, _>(fa, move |_| that.clone())
    }

    /// Composes two Kleisli arrows left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Option, OptionTypeLambda};
    /// use hkt_std::typeclass::FlatMap;
    ///
    /// let parse = |text: &str| Option::from_nullable(text.parse::<i32>().ok());
    /// let positive = |n: i32| if n > 0 { Option::some(n) } else { Option::none() };
    ///
    /// let mut both = OptionTypeLambda::compose_kleisli_arrow::<(), (), (), _, _, _, _, _>(parse, positive);
    /// assert_eq!(both("12"), Option::some(12));
    /// assert_eq!(both("-3"), Option::none());
    /// assert_eq!(both("x"), Option::none());
    /// ```
    #[inline]
    fn compose_kleisli_arrow<R, O, E, A, B, C, First, Second>(
        mut first: First,
        mut second: Second,
    ) -> impl FnMut(A) -> Kind<Self, R, O, E, C>
    where
        First: FnMut(A) -> Kind<Self, R, O, E, B>,
        Second: FnMut(B) -> Kind<Self, R, O, E, C>,
    {
        move |value| Self::flat_map::<R, O, E, B, C, _>(first(value), &mut second)
    }
}
