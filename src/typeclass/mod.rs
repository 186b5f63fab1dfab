//! Type class traits for functional programming abstractions.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. This library describes a type
//! constructor with a [`TypeLambda`]: a marker type whose Generic Associated
//! Type resolves four slot arguments to a concrete type, applied with
//! [`Kind`]. Every type class below is a trait on the lambda, so it is
//! written once and specialized by picking a lambda such as
//! `OptionTypeLambda`.
//!
//! ## Hierarchy
//!
//! ```text
//! Invariant ── Covariant ──┬── Pointed (+ Of) ──┐
//!           │              │                    ├── Monad (+ FlatMap)
//!           └── SemiProduct ── Product (+ Of)   │
//! FlatMap ──────────────────────────────────────┘
//! Foldable
//! Semigroup ── Monoid
//! ```
//!
//! - [`Invariant`]: Bidirectional mapping
//! - [`Covariant`]: Mapping (functor)
//! - [`Of`], [`Pointed`]: Lifting plain values
//! - [`FlatMap`], [`Monad`]: Sequencing dependent computations
//! - [`SemiProduct`], [`Product`]: Combining independent values into tuples
//! - [`Foldable`]: Folding to a summary value
//! - [`Semigroup`], [`Monoid`]: Associative combination of plain values
//!
//! ## Calling Conventions
//!
//! The type class operations are associated functions on the lambda, taking
//! the data first: `OptionTypeLambda::map(fa, f)`. Concrete data types expose
//! the same operations as methods (`fa.map(f)`), with identical behavior.
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod covariant;
mod flat_map;
mod foldable;
mod higher;
mod invariant;
mod monad;
mod monoid;
mod of;
mod product;
mod semi_product;
mod semigroup;
mod wrappers;

pub use covariant::{Covariant, imap_from_map};
pub use flat_map::FlatMap;
pub use foldable::Foldable;
pub use higher::{Kind, TypeLambda};
pub use invariant::Invariant;
pub use monad::Monad;
pub use monoid::Monoid;
pub use of::{Of, Pointed};
pub use product::Product;
pub use semi_product::SemiProduct;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Sum};
