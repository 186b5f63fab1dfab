//! Foldable type class - folding a structure to a summary value.
//!
//! This module provides the `Foldable` trait, which accumulates the values in
//! the target slot of a structure from left to right.
//!
//! # Laws
//!
//! `Foldable` has no laws as strict as the other type classes, but the
//! provided methods must stay consistent with `reduce`:
//!
//! ```text
//! to_vec(fa) == reduce(fa, vec![], |mut v, a| { v.push(a); v })
//! fold_map(fa, f) == reduce(fa, M::empty(), |m, a| m.combine(f(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::data::option::{Option, OptionTypeLambda};
//! use hkt_std::typeclass::Foldable;
//!
//! let some_value = Option::some(10);
//! let result = OptionTypeLambda::reduce::<(), (), (), _, _, _>(some_value, 5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 15);
//!
//! let none_value: Option<i32> = Option::none();
//! let result = OptionTypeLambda::reduce::<(), (), (), _, _, _>(none_value, 5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::{Kind, TypeLambda};
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `reduce`: Left-to-right fold
///
/// # Provided Methods
///
/// - `to_vec`: Collect the values into a `Vec`
/// - `fold_map`: Map each value to a [`Monoid`] and combine the results
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::{Foldable, Sum};
///
/// let total: Sum<i32> = OptionTypeLambda::fold_map::<(), (), (), _, _, _>(Option::some(3), Sum);
/// assert_eq!(total, Sum(3));
/// ```
pub trait Foldable: TypeLambda {
    /// Folds the structure from left to right, starting from `seed`.
    ///
    /// # Arguments
    ///
    /// * `fa` - The structure to fold
    /// * `seed` - The initial accumulator value
    /// * `function` - Combines the accumulator with the next value
    ///
    /// # Returns
    ///
    /// The final accumulator; `seed` unchanged for an empty structure
    fn reduce<R, O, E, A, B, Function>(
        fa: Kind<Self, R, O, E, A>,
        seed: B,
        function: Function,
    ) -> B
    where
        Function: FnMut(B, A) -> B;

    /// Collects the values of the structure into a `Vec`, in fold order.
    #[inline]
    fn to_vec<R, O, E, A>(fa: Kind<Self, R, O, E, A>) -> Vec<A> {
        Self::reduce::<R, O, E, A, Vec<A>, _>(fa, Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Maps every value to a [`Monoid`] and combines the results.
    ///
    /// An empty structure yields `M::empty()`.
    #[inline]
    fn fold_map<R, O, E, A, M, Function>(fa: Kind<Self, R, O, E, A>, mut function: Function) -> M
    where
        M: Monoid,
        Function: FnMut(A) -> M,
    {
        Self::reduce::<R, O, E, A, M, _>(fa, M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }
}
