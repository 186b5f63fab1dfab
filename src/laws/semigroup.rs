use std::fmt;
use std::marker::PhantomData;

use super::{Equality, StructuralEquality, verified};
use crate::type_level::VarianceOut;
use crate::typeclass::{Monoid, Semigroup};

/// Laws of [`Semigroup`] for the value type `T`.
///
/// - associativity: `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Examples
///
/// ```rust
/// use hkt_std::laws::SemigroupLaws;
///
/// SemigroupLaws::<String>::new().associativity("a".into(), "b".into(), "c".into());
/// ```
pub struct SemigroupLaws<T, S = StructuralEquality> {
    equality: S,
    value: VarianceOut<T>,
}

/// Laws of [`Monoid`] for the value type `T`.
///
/// - left identity: `T::empty().combine(a) == a`
/// - right identity: `a.combine(T::empty()) == a`
pub struct MonoidLaws<T, S = StructuralEquality> {
    equality: S,
    value: VarianceOut<T>,
}

impl<T> SemigroupLaws<T> {
    /// Creates the harness with structural equality.
    pub const fn new() -> Self {
        Self::with_equality(StructuralEquality)
    }
}

impl<T, S> SemigroupLaws<T, S> {
    /// Creates the harness with a custom equality strategy.
    pub const fn with_equality(equality: S) -> Self {
        Self {
            equality,
            value: PhantomData,
        }
    }
}

impl<T: Semigroup + Clone, S: Equality<T>> SemigroupLaws<T, S> {
    /// Combining may be regrouped.
    #[track_caller]
    pub fn associativity(&self, first: T, second: T, third: T) {
        let left = first.clone().combine(second.clone()).combine(third.clone());
        let right = first.combine(second.combine(third));
        self.equality.assert_equal("semigroup associativity", &left, &right);
        verified("Semigroup", "associativity");
    }
}

impl<T> MonoidLaws<T> {
    /// Creates the harness with structural equality.
    pub const fn new() -> Self {
        Self::with_equality(StructuralEquality)
    }
}

impl<T, S> MonoidLaws<T, S> {
    /// Creates the harness with a custom equality strategy.
    pub const fn with_equality(equality: S) -> Self {
        Self {
            equality,
            value: PhantomData,
        }
    }
}

impl<T: Monoid + Clone, S: Equality<T>> MonoidLaws<T, S> {
    /// `empty` on the left changes nothing.
    #[track_caller]
    pub fn left_identity(&self, value: T) {
        let combined = T::empty().combine(value.clone());
        self.equality.assert_equal("monoid left identity", &combined, &value);
        verified("Monoid", "left_identity");
    }

    /// `empty` on the right changes nothing.
    #[track_caller]
    pub fn right_identity(&self, value: T) {
        let combined = value.clone().combine(T::empty());
        self.equality.assert_equal("monoid right identity", &combined, &value);
        verified("Monoid", "right_identity");
    }
}

impl<T, S: Default> Default for SemigroupLaws<T, S> {
    fn default() -> Self {
        Self::with_equality(S::default())
    }
}

impl<T, S: Default> Default for MonoidLaws<T, S> {
    fn default() -> Self {
        Self::with_equality(S::default())
    }
}

impl<T, S: fmt::Debug> fmt::Debug for SemigroupLaws<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SemigroupLaws")
            .field("equality", &self.equality)
            .field("value", &self.value)
            .finish()
    }
}

impl<T, S: fmt::Debug> fmt::Debug for MonoidLaws<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MonoidLaws")
            .field("equality", &self.equality)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::EqualBy;
    use crate::typeclass::{Max, Sum};
    use rstest::rstest;

    #[rstest]
    fn vec_is_associative() {
        SemigroupLaws::<Vec<u8>>::new().associativity(vec![1], vec![2, 3], vec![]);
    }

    #[rstest]
    fn max_has_identity_on_both_sides() {
        let laws = MonoidLaws::<Max<i16>>::new();
        laws.left_identity(Max(-5));
        laws.right_identity(Max(i16::MIN));
    }

    #[rstest]
    fn custom_equality_is_used() {
        let by_length = EqualBy(|left: &String, right: &String| left.len() == right.len());
        SemigroupLaws::<String, _>::with_equality(by_length).associativity("ab".into(), "c".into(), "d".into());
    }

    #[rstest]
    #[should_panic(expected = "monoid left identity law violated")]
    fn unlawful_instance_is_reported() {
        #[derive(Debug, Clone, PartialEq)]
        struct Off(i32);

        impl Semigroup for Off {
            fn combine(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }
        }

        impl Monoid for Off {
            fn empty() -> Self {
                Self(1)
            }
        }

        MonoidLaws::<Off>::new().left_identity(Off(0));
    }

    #[rstest]
    fn debug_names_the_harness() {
        let rendered = format!("{:?}", MonoidLaws::<Sum<i32>>::default());
        assert!(rendered.starts_with("MonoidLaws"));
    }
}
