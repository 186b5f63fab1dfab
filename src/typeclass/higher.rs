//! Higher-Kinded Type emulation through type lambdas.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module describes a type constructor with a *type lambda*: a
//! zero-sized marker type whose Generic Associated Type says what the
//! constructor produces for given arguments. Type classes are then written
//! once against any `F: TypeLambda`.
//!
//! # Slots
//!
//! Every type lambda has four slots:
//!
//! | Slot     | Variance      | Name in signatures |
//! |----------|---------------|--------------------|
//! | `In`     | contravariant | `R`                |
//! | `Out2`   | covariant     | `O`                |
//! | `Out1`   | covariant     | `E`                |
//! | `Target` | invariant     | `A`, `B`, ...      |
//!
//! A constructor with a single parameter, like `Option`, ignores the first
//! three. Once `F` is concrete, `Kind` normalizes to the real type and takes
//! its variance. While `F` is still generic the projection is invariant in
//! every slot, so code that needs to remember slot arguments with their
//! declared variance, without holding a value, uses
//! [`Slots`](crate::type_level::Slots).
//!
//! # Example
//!
//! ```rust
//! use hkt_std::data::option::{Option, OptionTypeLambda};
//! use hkt_std::typeclass::Kind;
//!
//! let value: Kind<OptionTypeLambda, (), (), (), i32> = Option::some(42);
//! assert!(value.is_some());
//! ```

/// A description of a type constructor with four slots.
///
/// Implementors are uninhabited marker types. The lambda is never
/// instantiated; it only exists to be named in type class bounds.
///
/// # Laws
///
/// `Type` must be a closed-form definition: the same arguments always
/// resolve to the same concrete type.
///
/// # Example
///
/// ```rust
/// use hkt_std::typeclass::TypeLambda;
///
/// enum VecTypeLambda {}
///
/// impl TypeLambda for VecTypeLambda {
///     type Type<In, Out2, Out1, Target> = Vec<Target>;
/// }
/// ```
pub trait TypeLambda {
    /// The concrete type produced for the given slot arguments.
    type Type<In, Out2, Out1, Target>;
}

/// Applies the type lambda `F` to its four slot arguments.
///
/// For a concrete lambda this normalizes to the concrete type, e.g.
/// `Kind<OptionTypeLambda, R, O, E, A>` is `Option<A>`.
pub type Kind<F, In, Out2, Out1, Target> = <F as TypeLambda>::Type<In, Out2, Out1, Target>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    enum VecTypeLambda {}

    impl TypeLambda for VecTypeLambda {
        type Type<In, Out2, Out1, Target> = Vec<Target>;
    }

    enum ResultTypeLambda {}

    impl TypeLambda for ResultTypeLambda {
        type Type<In, Out2, Out1, Target> = Result<Target, Out1>;
    }

    enum ReaderTypeLambda {}

    impl TypeLambda for ReaderTypeLambda {
        type Type<In, Out2, Out1, Target> = Box<dyn Fn(In) -> Target>;
    }

    assert_type_eq_all!(Kind<VecTypeLambda, (), (), (), i32>, Vec<i32>);
    assert_type_eq_all!(Kind<ResultTypeLambda, (), (), String, u8>, Result<u8, String>);
    assert_type_eq_all!(
        Kind<ReaderTypeLambda, i32, (), (), bool>,
        Box<dyn Fn(i32) -> bool>
    );

    #[rstest]
    fn generic_code_can_build_a_kind_through_a_constructor() {
        fn lift<F: TypeLambda, A>(
            constructor: impl FnOnce(A) -> Kind<F, (), (), (), A>,
            value: A,
        ) -> Kind<F, (), (), (), A> {
            constructor(value)
        }

        let result = lift::<VecTypeLambda, _>(|value| vec![value], 3);
        assert_eq!(result, vec![3]);
    }

    #[rstest]
    fn unused_slots_do_not_change_the_resolved_type() {
        let left: Kind<VecTypeLambda, String, u8, bool, i32> = vec![1];
        let right: Kind<VecTypeLambda, (), (), (), i32> = left.clone();
        assert_eq!(left, right);
    }

    #[rstest]
    fn out1_slot_carries_the_error_of_a_result() {
        let failure: Kind<ResultTypeLambda, (), (), &str, i32> = Err("boom");
        assert_eq!(failure, Err("boom"));
    }
}
