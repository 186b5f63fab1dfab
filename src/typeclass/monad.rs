//! Monad type class - `FlatMap` together with `Pointed`.
//!
//! A monad can lift plain values ([`Of`](super::Of)), map them
//! ([`Covariant`](super::Covariant)) and sequence dependent computations
//! ([`FlatMap`]). `Monad` has no operations of its own; it is implemented for
//! every type lambda that is both [`FlatMap`] and [`Pointed`].
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! flat_map(of(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! flat_map(fa, of) == fa
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::data::option::{Option, OptionTypeLambda};
//! use hkt_std::typeclass::{Kind, Monad};
//!
//! fn square_root<F: Monad>(
//!     fa: Kind<F, (), (), (), f64>,
//!     empty: Kind<F, (), (), (), f64>,
//! ) -> Kind<F, (), (), (), f64>
//! where
//!     Kind<F, (), (), (), f64>: Clone,
//! {
//!     F::flat_map::<(), (), (), f64, f64, _>(fa, move |n| {
//!         if n >= 0.0 { F::of::<(), (), (), f64>(n.sqrt()) } else { empty.clone() }
//!     })
//! }
//!
//! let root = square_root::<OptionTypeLambda>(Option::some(16.0), Option::none());
//! assert_eq!(root, Option::some(4.0));
//! ```

use super::flat_map::FlatMap;
use super::of::Pointed;

/// A type class for type constructors supporting lifting and dependent
/// sequencing.
pub trait Monad: FlatMap + Pointed {}

impl<F: FlatMap + Pointed> Monad for F {}
