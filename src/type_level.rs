//! Type-level utilities shared by the type lambda encoding.
//!
//! Nothing in this module has a runtime representation beyond zero-sized
//! markers:
//!
//! - [`VarianceIn`], [`VarianceOut`], [`VarianceInOut`]: variance markers
//! - [`Slots`]: the four slot arguments of a kind, each tagged with its variance
//! - [`TypeEquals`]: a witness that two types are the same type
//! - [`Tagged`]: tag extraction from a tagged union
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::type_level::TypeEquals;
//!
//! fn same<A, B: TypeEquals<A>>(value: B) -> A {
//!     value.cast()
//! }
//!
//! assert_eq!(same::<i32, i32>(7), 7);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Marks `T` as used in contravariant (input) position.
pub type VarianceIn<T> = PhantomData<fn(T)>;

/// Marks `T` as used in covariant (output) position.
pub type VarianceOut<T> = PhantomData<fn() -> T>;

/// Marks `T` as used in both positions, which makes it invariant.
pub type VarianceInOut<T> = PhantomData<fn(T) -> T>;

/// The four slot arguments of a kind with their declared variance.
///
/// `In` is contravariant, `Out2` and `Out1` are covariant and `Target` is
/// invariant. Generic code that has to remember which arguments a kind was
/// applied to, without holding a value of that kind, stores a `Slots`.
///
/// `Slots` never owns any of its arguments, so it is `Copy`, `Send` and
/// `Sync` regardless of them.
pub struct Slots<In, Out2, Out1, Target> {
    input: VarianceIn<In>,
    output2: VarianceOut<Out2>,
    output1: VarianceOut<Out1>,
    target: VarianceInOut<Target>,
}

impl<In, Out2, Out1, Target> Slots<In, Out2, Out1, Target> {
    /// Creates the marker.
    #[inline]
    pub const fn new() -> Self {
        Self {
            input: PhantomData,
            output2: PhantomData,
            output1: PhantomData,
            target: PhantomData,
        }
    }
}

impl<In, Out2, Out1, Target> Default for Slots<In, Out2, Out1, Target> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Out2, Out1, Target> Clone for Slots<In, Out2, Out1, Target> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<In, Out2, Out1, Target> Copy for Slots<In, Out2, Out1, Target> {}

impl<In, Out2, Out1, Target> fmt::Debug for Slots<In, Out2, Out1, Target> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            input,
            output2,
            output1,
            target,
        } = self;
        formatter
            .debug_struct("Slots")
            .field("in", input)
            .field("out2", output2)
            .field("out1", output1)
            .field("target", target)
            .finish()
    }
}

/// Witnesses that `Self` and `T` are the same type.
///
/// The crate implements it only as `impl<T> TypeEquals<T> for T`, so a bound
/// `A: TypeEquals<B>` holds exactly when `A == B`. It lets
/// a method on `Wrapper<A>` require that `A` has a particular shape, as
/// `Option::flatten` in `data::option` does.
pub trait TypeEquals<T> {
    /// Converts the value to the type it is known to be.
    fn cast(self) -> T;
}

impl<T> TypeEquals<T> for T {
    #[inline]
    fn cast(self) -> T {
        self
    }
}

/// Tag extraction for tagged unions.
///
/// `ID` names the union itself and [`tag`](Tagged::tag) names the variant a
/// value currently holds.
pub trait Tagged {
    /// The name of the union.
    const ID: &'static str;

    /// The name of the variant this value holds.
    fn tag(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::{assert_eq_size, assert_impl_all};

    assert_eq_size!(Slots<String, Vec<u8>, i32, bool>, ());
    assert_impl_all!(Slots<std::rc::Rc<i32>, (), (), ()>: Send, Sync, Copy);

    #[rstest]
    fn type_equals_cast_is_identity() {
        fn through<A, B: TypeEquals<A>>(value: B) -> A {
            value.cast()
        }

        assert_eq!(through::<String, String>("text".to_string()), "text");
    }

    #[rstest]
    fn slots_debug_names_every_slot() {
        let rendered = format!("{:?}", Slots::<i32, u8, u16, u32>::new());
        assert!(rendered.starts_with("Slots"));
        assert!(rendered.contains("in"));
        assert!(rendered.contains("target"));
    }

    #[rstest]
    fn covariant_slot_accepts_subtype_lifetimes() {
        fn shorten<'short>(
            slots: Slots<(), &'static str, (), ()>,
        ) -> Slots<(), &'short str, (), ()> {
            slots
        }

        let _ = shorten(Slots::new());
    }

    #[rstest]
    fn contravariant_slot_accepts_supertype_lifetimes() {
        fn lengthen<'short>(
            slots: Slots<&'short str, (), (), ()>,
        ) -> Slots<&'static str, (), (), ()> {
            slots
        }

        let _ = lengthen(Slots::new());
    }
}
