//! Of and Pointed type classes - lifting plain values.
//!
//! [`Of`] lifts a plain value into the target slot of a type constructor.
//! [`Pointed`] is the combination of [`Covariant`] and [`Of`]; it has no
//! operations of its own and is implemented for every type lambda that has
//! both.
//!
//! # Laws
//!
//! Together with `map`, `of` must be natural:
//!
//! ```text
//! map(of(a), f) == of(f(a))
//! ```

use super::covariant::Covariant;
use super::higher::{Kind, TypeLambda};

/// A type class for type constructors that can lift a plain value.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::Of;
///
/// let lifted = OptionTypeLambda::of::<(), (), (), _>(42);
/// assert_eq!(lifted, Option::some(42));
/// ```
pub trait Of: TypeLambda {
    /// Lifts `value` into the target slot.
    fn of<R, O, E, A>(value: A) -> Kind<Self, R, O, E, A>;

    /// Lifts the unit value.
    #[inline]
    fn unit<R, O, E>() -> Kind<Self, R, O, E, ()> {
        Self::of::<R, O, E, ()>(())
    }
}

/// A covariant type constructor that can lift plain values.
pub trait Pointed: Covariant + Of {}

impl<F: Covariant + Of> Pointed for F {}
