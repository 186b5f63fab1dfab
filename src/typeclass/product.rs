//! Product type class - combining any number of independent values.
//!
//! `Product` extends [`SemiProduct`] with [`Of`], so it can also combine an
//! empty collection: the result is `of(vec![])`.

use super::higher::Kind;
use super::of::Of;
use super::semi_product::SemiProduct;

/// A type class for type constructors that can combine a whole collection
/// of structures into one.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::{Option, OptionTypeLambda};
/// use hkt_std::typeclass::Product;
///
/// let all = OptionTypeLambda::product_all::<(), (), (), _, _>(vec![
///     Option::some(1),
///     Option::some(2),
///     Option::some(3),
/// ]);
/// assert_eq!(all, Option::some(vec![1, 2, 3]));
///
/// let gap = OptionTypeLambda::product_all::<(), (), (), _, _>(vec![
///     Option::some(1),
///     Option::none(),
///     Option::some(3),
/// ]);
/// assert_eq!(gap, Option::none());
/// ```
pub trait Product: SemiProduct + Of {
    /// Combines every structure of `collection`, preserving iteration order.
    ///
    /// Implementations with an empty variant return it at the first empty
    /// element and stop consuming `collection`.
    fn product_all<R, O, E, A, Collection>(collection: Collection) -> Kind<Self, R, O, E, Vec<A>>
    where
        Collection: IntoIterator<Item = Kind<Self, R, O, E, A>>;
}
