//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

use std::ops::Add;

use super::wrappers::{Max, Min, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::typeclass::Semigroup;
    ///
    /// let result = String::from("Hello, ").combine(String::from("World!"));
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Folds `rest` into `self` from left to right.
    ///
    /// An empty `rest` returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::typeclass::Semigroup;
    ///
    /// let joined = String::from("a").combine_many(vec![String::from("b"), String::from("c")]);
    /// assert_eq!(joined, "abc");
    /// ```
    #[must_use]
    fn combine_many<I>(self, rest: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        rest.into_iter()
            .fold(self, |accumulator, element| accumulator.combine(element))
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("ab")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        let mut iterator = iterator.into_iter();
        let first = iterator.next()?;
        Some(first.combine_many(iterator))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Unit and Tuple Implementations
// =============================================================================

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Pairs form a semigroup when both their elements are semigroups.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Max forms a semigroup by taking the maximum value.
impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

/// Min forms a semigroup by taking the minimum value.
impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine(right), "Hello, World!");
    }

    #[rstest]
    fn vec_combine_concatenates() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(vec![], "a")]
    #[case(vec!["b"], "ab")]
    #[case(vec!["b", "c", "d"], "abcd")]
    fn combine_many_folds_left(#[case] rest: Vec<&str>, #[case] expected: &str) {
        let rest = rest.into_iter().map(String::from);
        assert_eq!(String::from("a").combine_many(rest), expected);
    }

    #[rstest]
    fn combine_many_keeps_left_to_right_order() {
        let result = vec![1].combine_many(vec![vec![2, 3], vec![], vec![4]]);
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn reduce_all_of_empty_is_none() {
        assert_eq!(Sum::reduce_all(Vec::<Sum<i32>>::new()), None);
    }

    #[rstest]
    fn pair_combines_componentwise() {
        let left = (Sum(1), String::from("a"));
        let right = (Sum(2), String::from("b"));
        assert_eq!(left.combine(right), (Sum(3), String::from("ab")));
    }

    #[rstest]
    #[case(Max(3), Max(7), Max(7))]
    #[case(Max(7), Max(3), Max(7))]
    fn max_keeps_larger(#[case] left: Max<i32>, #[case] right: Max<i32>, #[case] expected: Max<i32>) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    #[case(Min(3), Min(7), Min(3))]
    #[case(Min(7), Min(3), Min(3))]
    fn min_keeps_smaller(#[case] left: Min<i32>, #[case] right: Min<i32>, #[case] expected: Min<i32>) {
        assert_eq!(left.combine(right), expected);
    }
}
