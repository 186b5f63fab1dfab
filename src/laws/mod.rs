//! Reusable checks for the algebraic laws of each type class.
//!
//! Every harness is generic over the instance under test and an
//! [`Equality`] strategy. Calling a law method with concrete values runs both
//! sides of the law and asserts that they agree, so the harnesses compose
//! with ordinary `#[test]` functions and with `proptest!`.
//!
//! Harnesses over a type lambda also carry the three non-target slots
//! (`R`, `O`, `E`, all `()` by default) the instance is exercised at.
//!
//! | Harness             | Laws                                              |
//! |---------------------|---------------------------------------------------|
//! | [`InvariantLaws`]   | identity, composition                             |
//! | [`CovariantLaws`]   | identity, composition                             |
//! | [`FlatMapLaws`]     | associativity                                     |
//! | [`MonadLaws`]       | left identity, right identity, associativity      |
//! | [`SemiProductLaws`] | associativity                                     |
//! | [`SemigroupLaws`]   | associativity                                     |
//! | [`MonoidLaws`]      | left identity, right identity                     |
//!
//! A verified law is reported as a `TRACE` event with `typeclass` and `law`
//! fields.
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::data::option::{Option, OptionTypeLambda};
//! use hkt_std::laws::CovariantLaws;
//!
//! let laws = CovariantLaws::<OptionTypeLambda>::new();
//! laws.identity(Option::some(1));
//! laws.composition(Option::some(1), |n: i32| n + 1, |n: i32| n * 2);
//! ```

/// Declares a harness over a type lambda `F` with its constructors.
macro_rules! lambda_harness {
    ($(#[$meta:meta])* $harness:ident) => {
        $(#[$meta])*
        pub struct $harness<F, S = $crate::laws::StructuralEquality, R = (), O = (), E = ()> {
            equality: S,
            lambda: $crate::type_level::VarianceOut<F>,
            slots: $crate::type_level::Slots<R, O, E, ()>,
        }

        impl<F> $harness<F> {
            /// Creates the harness with structural equality at unit slots.
            pub const fn new() -> Self {
                Self::with_equality($crate::laws::StructuralEquality)
            }
        }

        impl<F, S, R, O, E> $harness<F, S, R, O, E> {
            /// Creates the harness with a custom equality strategy.
            pub const fn with_equality(equality: S) -> Self {
                Self {
                    equality,
                    lambda: ::std::marker::PhantomData,
                    slots: $crate::type_level::Slots::new(),
                }
            }
        }

        impl<F, S: Default, R, O, E> Default for $harness<F, S, R, O, E> {
            fn default() -> Self {
                Self::with_equality(S::default())
            }
        }

        impl<F, S: std::fmt::Debug, R, O, E> std::fmt::Debug for $harness<F, S, R, O, E> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_struct(stringify!($harness))
                    .field("equality", &self.equality)
                    .field("lambda", &self.lambda)
                    .field("slots", &self.slots)
                    .finish()
            }
        }
    };
}

mod covariant;
mod equality;
mod flat_map;
mod invariant;
mod monad;
mod semi_product;
mod semigroup;

pub use covariant::CovariantLaws;
pub use equality::{EqualBy, Equality, StructuralEquality};
pub use flat_map::FlatMapLaws;
pub use invariant::InvariantLaws;
pub use monad::MonadLaws;
pub use semi_product::SemiProductLaws;
pub use semigroup::{MonoidLaws, SemigroupLaws};

/// Reports a law that held.
fn verified(typeclass: &'static str, law: &'static str) {
    tracing::trace!(typeclass, law, "law verified");
}
