//! # hkt-std
//!
//! A small functional programming standard library extension for Rust:
//! higher-kinded type lambdas, lawful typeclasses written once against them,
//! and an `Option` data type implementing the whole hierarchy.
//!
//! ## Overview
//!
//! - **Type-level utilities**: variance markers, type-equality witnesses and
//!   tag extraction ([`type_level`])
//! - **Type Classes**: Invariant, Covariant, Of, Pointed, `FlatMap`, Monad,
//!   `SemiProduct`, Product, Foldable, Semigroup and Monoid ([`typeclass`])
//! - **Data Types**: [`data::option::Option`], the reference instance
//! - **Laws**: reusable harnesses checking each typeclass's algebraic laws
//!   ([`laws`])
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type lambdas and type class traits
//! - `data`: The `Option` data type and its instances
//! - `laws`: Law-verification harnesses
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use hkt_std::data::option::{Option, OptionTypeLambda};
//! use hkt_std::typeclass::{Covariant, FlatMap};
//!
//! // Fluent style
//! let fluent = Option::some(1).map(|n| n + 1);
//!
//! // The same operation through the type lambda
//! let generic = <OptionTypeLambda as Covariant>::map::<(), (), (), _, _, _>(
//!     Option::some(1),
//!     |n| n + 1,
//! );
//! assert_eq!(fluent, generic);
//!
//! let chained = Option::some(1).flat_map(|n| if n > 0 { Option::some(n * 2) } else { Option::none() });
//! assert_eq!(chained, Option::some(2));
//! # let _ = <OptionTypeLambda as FlatMap>::flatten::<(), (), (), i32>(Option::some(Option::some(1)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type class traits and the `Option` type lambda. The
/// `Option` data type itself is not glob-exported so it never shadows
/// `std::option::Option` by accident.
///
/// # Usage
///
/// ```rust
/// use hkt_std::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::option::OptionTypeLambda;

    #[cfg(feature = "laws")]
    pub use crate::laws::*;
}

pub mod type_level;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "laws")]
pub mod laws;
