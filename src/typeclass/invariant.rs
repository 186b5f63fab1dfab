//! Invariant type class - bidirectional mapping.
//!
//! An invariant functor can transform its contents when given a function in
//! each direction. It is the root of the hierarchy: every
//! [`Covariant`](super::Covariant) and every
//! [`SemiProduct`](super::SemiProduct) is also `Invariant`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! imap(fa, |x| x, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! imap(imap(fa, f1, f2), g1, g2) == imap(fa, |a| g1(f1(a)), |c| f2(g2(c)))
//! ```
//!
//! The forward functions compose left to right, the backward functions right
//! to left.

use super::higher::{Kind, TypeLambda};

/// A type class for type constructors that can be mapped with a pair of
/// inverse functions.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::Invariant;
///
/// let celsius = Option::some(100.0_f64);
/// let fahrenheit = OptionTypeLambda::imap::<(), (), (), _, _, _, _>(
///     celsius,
///     |c| c * 9.0 / 5.0 + 32.0,
///     |f| (f - 32.0) * 5.0 / 9.0,
/// );
/// assert_eq!(fahrenheit, Option::some(212.0));
/// ```
pub trait Invariant: TypeLambda {
    /// Transforms the target slot with `to`, keeping `from` as its inverse.
    fn imap<R, O, E, A, B, Forward, Backward>(
        fa: Kind<Self, R, O, E, A>,
        to: Forward,
        from: Backward,
    ) -> Kind<Self, R, O, E, B>
    where
        Forward: FnMut(A) -> B,
        Backward: FnMut(B) -> A;
}
