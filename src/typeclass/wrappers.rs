//! Newtype wrappers selecting a `Semigroup`/`Monoid` for a type.
//!
//! The same underlying type can be combined in more than one lawful way.
//! Integers, for example, can be added (`Sum`) or compared (`Max`, `Min`).
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition-based semigroup/monoid (identity: `Default`, i.e. 0)
//! - [`Max`]: Maximum-based semigroup (identity: type minimum)
//! - [`Min`]: Minimum-based semigroup (identity: type maximum)
//!
//! [`Bounded`] supplies the minimum and maximum values `Max` and `Min` need
//! for their monoid instances.

macro_rules! newtype_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)` and the identity element is
/// `Sum(A::default())`.
///
/// # Examples
///
/// ```rust
/// use hkt_std::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

newtype_accessors!(Sum);

/// A newtype wrapper that keeps the larger of two values.
///
/// # Examples
///
/// ```rust
/// use hkt_std::typeclass::{Max, Monoid, Semigroup};
///
/// assert_eq!(Max(3).combine(Max(9)), Max(9));
/// assert_eq!(Max::<u8>::empty(), Max(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

newtype_accessors!(Max);

/// A newtype wrapper that keeps the smaller of two values.
///
/// # Examples
///
/// ```rust
/// use hkt_std::typeclass::{Min, Monoid, Semigroup};
///
/// assert_eq!(Min(3).combine(Min(9)), Min(3));
/// assert_eq!(Min::<u8>::empty(), Min(255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

newtype_accessors!(Min);

/// Types with a least and a greatest value.
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;

    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accessors_round_trip() {
        let wrapped = Max::from(5);
        assert_eq!(*wrapped.as_inner(), 5);
        assert_eq!(wrapped.into_inner(), 5);
    }

    #[rstest]
    fn bounded_matches_primitive_limits() {
        assert_eq!(i32::MIN_VALUE, i32::MIN);
        assert_eq!(u64::MAX_VALUE, u64::MAX);
        assert!(!bool::MIN_VALUE);
        assert_eq!(char::MIN_VALUE, '\0');
    }
}
