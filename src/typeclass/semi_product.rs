//! `SemiProduct` type class - combining independent values into tuples.
//!
//! `product` pairs the values of two independent structures. For types with
//! an empty or failure variant, the result is empty as soon as either side is.
//! `product_many` extends this to a head structure followed by any number of
//! further structures of the same element type.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! Up to reassociation of the nested tuples:
//!
//! ```text
//! map(product(fa, product(fb, fc)), |(a, (b, c))| (a, b, c))
//!     == map(product(product(fa, fb), fc), |((a, b), c)| (a, b, c))
//! ```

use super::higher::Kind;
use super::invariant::Invariant;

/// A type class for type constructors whose values can be combined
/// pairwise.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::SemiProduct;
///
/// let pair = OptionTypeLambda::product::<(), (), (), _, _>(Option::some(1), Option::some("one"));
/// assert_eq!(pair, Option::some((1, "one")));
///
/// let missing = OptionTypeLambda::product::<(), (), (), _, _>(Option::some(1), Option::<&str>::none());
/// assert_eq!(missing, Option::none());
/// ```
pub trait SemiProduct: Invariant {
    /// Combines two structures into one holding the pair of their values.
    fn product<R, O, E, A, B>(
        fa: Kind<Self, R, O, E, A>,
        that: Kind<Self, R, O, E, B>,
    ) -> Kind<Self, R, O, E, (A, B)>;

    /// Combines a head structure with every structure of `collection`.
    ///
    /// The resulting vector is never empty: its first element comes from
    /// `fa`, the rest follow the iteration order of `collection`.
    /// Implementations with an empty variant return it as soon as one is
    /// encountered and stop consuming `collection`.
    fn product_many<R, O, E, A, Collection>(
        fa: Kind<Self, R, O, E, A>,
        collection: Collection,
    ) -> Kind<Self, R, O, E, Vec<A>>
    where
        Collection: IntoIterator<Item = Kind<Self, R, O, E, A>>;
}
