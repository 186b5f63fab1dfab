//! Covariant type class - mapping over the target slot.
//!
//! This module provides the `Covariant` trait (a functor), which transforms
//! the value(s) held in the target slot while preserving the structure
//! around them.
//!
//! # Laws
//!
//! All `Covariant` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::data::option::{Option, OptionTypeLambda};
//! use hkt_std::typeclass::Covariant;
//!
//! let some_value = Option::some(5);
//! let transformed = OptionTypeLambda::map::<(), (), (), _, _, _>(some_value, |n| n.to_string());
//! assert_eq!(transformed, Option::some("5".to_string()));
//!
//! let none_value: Option<i32> = Option::none();
//! let transformed = OptionTypeLambda::map::<(), (), (), _, _, _>(none_value, |n| n.to_string());
//! assert_eq!(transformed, Option::none());
//! ```

use super::higher::Kind;
use super::invariant::Invariant;

/// A type class for type constructors whose target slot can be mapped.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// map(map(fa, f), g) == map(fa, |x| g(f(x)))
/// ```
///
/// An implementation usually derives its [`Invariant`] instance from `map`
/// with [`imap_from_map`].
pub trait Covariant: Invariant {
    /// Applies a function to the value(s) in the target slot.
    ///
    /// # Arguments
    ///
    /// * `fa` - The structure to transform
    /// * `function` - The transformation applied to each target value
    ///
    /// # Returns
    ///
    /// The same structure holding the transformed value(s)
    fn map<R, O, E, A, B, Function>(
        fa: Kind<Self, R, O, E, A>,
        function: Function,
    ) -> Kind<Self, R, O, E, B>
    where
        Function: FnMut(A) -> B;

    /// Replaces the value(s) in the target slot with a constant.
    ///
    /// This is equivalent to `map(fa, |_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Option, OptionTypeLambda};
    /// use hkt_std::typeclass::Covariant;
    ///
    /// let replaced = OptionTypeLambda::replace::<(), (), (), _, _>(Option::some(5), "replaced");
    /// assert_eq!(replaced, Option::some("replaced"));
    /// ```
    #[inline]
    fn replace<R, O, E, A, B>(fa: Kind<Self, R, O, E, A>, value: B) -> Kind<Self, R, O, E, B>
    where
        B: Clone,
    {
        Self::map::<R, O, E, A, B, _>(fa, move |_| value.clone())
    }

    /// Discards the value(s) in the target slot, keeping only the structure.
    #[inline]
    fn void<R, O, E, A>(fa: Kind<Self, R, O, E, A>) -> Kind<Self, R, O, E, ()> {
        Self::map::<R, O, E, A, (), _>(fa, |_| ())
    }

    /// Applies the wrapped function(s) to a plain argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Option, OptionTypeLambda};
    /// use hkt_std::typeclass::Covariant;
    ///
    /// let double: Option<fn(i32) -> i32> = Option::some(|n| n * 2);
    /// assert_eq!(OptionTypeLambda::flap::<(), (), (), _, _, _>(double, 21), Option::some(42));
    /// ```
    #[inline]
    fn flap<R, O, E, A, B, Function>(
        functions: Kind<Self, R, O, E, Function>,
        argument: A,
    ) -> Kind<Self, R, O, E, B>
    where
        A: Clone,
        Function: FnOnce(A) -> B,
    {
        Self::map::<R, O, E, Function, B, _>(functions, move |function: Function| {
            function(argument.clone())
        })
    }
}

/// Derives a lawful `imap` from a lawful `map` by ignoring the backward
/// function.
///
/// Instances implement [`Invariant`] by delegating to this helper:
///
/// ```rust
/// # use hkt_std::typeclass::{Covariant, Invariant, Kind, TypeLambda, imap_from_map};
/// enum BoxTypeLambda {}
///
/// impl TypeLambda for BoxTypeLambda {
///     type Type<In, Out2, Out1, Target> = Box<Target>;
/// }
///
/// impl Invariant for BoxTypeLambda {
///     fn imap<R, O, E, A, B, Forward, Backward>(
///         fa: Box<A>,
///         to: Forward,
///         from: Backward,
///     ) -> Box<B>
///     where
///         Forward: FnMut(A) -> B,
///         Backward: FnMut(B) -> A,
///     {
///         imap_from_map::<Self, R, O, E, A, B, Forward, Backward>(fa, to, from)
///     }
/// }
///
/// impl Covariant for BoxTypeLambda {
///     fn map<R, O, E, A, B, Function>(fa: Box<A>, mut function: Function) -> Box<B>
///     where
///         Function: FnMut(A) -> B,
///     {
///         Box::new(function(*fa))
///     }
/// }
///
/// let mapped = BoxTypeLambda::imap::<(), (), (), _, _, _, _>(Box::new(2), |n: i32| n + 1, |n| n - 1);
/// assert_eq!(*mapped, 3);
/// ```
#[inline]
pub fn imap_from_map<F, R, O, E, A, B, Forward, Backward>(
    fa: Kind<F, R, O, E, A>,
    to: Forward,
    _from: Backward,
) -> Kind<F, R, O, E, B>
where
    F: Covariant,
    Forward: FnMut(A) -> B,
    Backward: FnMut(B) -> A,
{
    F::map::<R, O, E, A, B, Forward>(fa, to)
}
