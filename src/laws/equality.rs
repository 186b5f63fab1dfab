use std::fmt::Debug;

/// How a law harness decides that both sides of a law agree.
///
/// A strategy panics when the sides differ, in the same way `assert_eq!`
/// does, so a violated law fails whichever test runner is driving the
/// harness (including inside `proptest!`).
///
/// Implement this for the types under test when structural `PartialEq` is
/// not the intended notion of equality, or wrap a comparison closure in
/// [`EqualBy`].
pub trait Equality<T> {
    /// Panics with a message naming `law` unless `left` and `right` agree.
    fn assert_equal(&self, law: &str, left: &T, right: &T);
}

/// Equality through `PartialEq`, reported like `assert_eq!`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralEquality;

impl<T: PartialEq + Debug> Equality<T> for StructuralEquality {
    #[track_caller]
    fn assert_equal(&self, law: &str, left: &T, right: &T) {
        assert_eq!(left, right, "{law} law violated");
    }
}

/// Equality decided by a comparison function.
///
/// # Examples
///
/// ```rust
/// use hkt_std::laws::{EqualBy, Equality};
///
/// let close = EqualBy(|left: &f64, right: &f64| (left - right).abs() < 1e-9);
/// close.assert_equal("tolerance", &(0.1 + 0.2), &0.3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EqualBy<Compare>(pub Compare);

impl<T, Compare> Equality<T> for EqualBy<Compare>
where
    T: Debug,
    Compare: Fn(&T, &T) -> bool,
{
    #[track_caller]
    fn assert_equal(&self, law: &str, left: &T, right: &T) {
        assert!(
            (self.0)(left, right),
            "{law} law violated\n  left: {left:?}\n right: {right:?}"
        );
    }
}
