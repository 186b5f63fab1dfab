//! Option type - a value that may be absent.
//!
//! This module provides `Option<A>`, which is either `Some(A)` or `None`.
//! Absence is an ordinary value: every operation except [`Option::get`] is
//! total and returns a new `Option` instead of failing.
//!
//! `Option` is the reference instance of the type class hierarchy; its type
//! lambda is [`OptionTypeLambda`].
//!
//! This type intentionally shares its name with `std::option::Option`.
//! Import it explicitly (`use hkt_std::data::option::Option;`) and convert
//! with `From`/[`Option::into_std`] at the boundary.
//!
//! # Examples
//!
//! ```rust
//! use hkt_std::data::option::Option;
//!
//! let some = Option::some(1).map(|n| n + 1);
//! assert_eq!(some, Option::some(2));
//!
//! let none = Option::<i32>::none().map(|n| n + 1);
//! assert_eq!(none, Option::none());
//!
//! // Absence from the standard library becomes `None`
//! assert!(Option::<i32>::from_nullable(None).is_none());
//! assert!(Option::from_nullable(Some(0)).is_some());
//! ```

mod error;
mod instances;
mod json;

use std::any::Any;
use std::fmt;

pub use error::OptionError;
pub use instances::OptionTypeLambda;

use crate::type_level::{Tagged, TypeEquals};

/// An optional value: either `Some(A)` or `None`.
///
/// The two variants are the only way to build an `Option`; there is no other
/// constructor and no base type to instantiate. Values are immutable, so an
/// `Option` never changes variant after construction.
///
/// `None` carries no payload and is the same for every `A`: all `None` values
/// are identical, zero-cost, and compare equal.
///
/// # Examples
///
/// ```rust
/// use hkt_std::data::option::Option;
///
/// let present: Option<&str> = Option::some("value");
/// let absent: Option<&str> = Option::none();
///
/// assert_eq!(present.get_or_else(|| "fallback"), "value");
/// assert_eq!(absent.get_or_else(|| "fallback"), "fallback");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<A> {
    /// No value.
    None,
    /// A present value.
    Some(A),
}

/// The two branches of [`Option::match_with`].
#[derive(Debug, Clone, Copy)]
pub struct Cases<OnNone, OnSome> {
    /// Evaluated when the option is `None`.
    pub on_none: OnNone,
    /// Applied to the value when the option is `Some`.
    pub on_some: OnSome,
}

impl<A> Option<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert!(Option::some(1).is_some());
    /// ```
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Some(value)
    }

    /// Lifts a plain value; the same as [`Option::some`].
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Some(value)
    }

    /// Returns the empty option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert_eq!(Option::<i32>::none(), Option::none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts a possibly absent standard-library value.
    ///
    /// `None` becomes `None` and `Some(value)` becomes `Some(value)`; a zero,
    /// an empty string or any other present value stays present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert_eq!(Option::from_nullable(Some(0)), Option::some(0));
    /// assert_eq!(Option::<i32>::from_nullable(None), Option::none());
    /// ```
    #[inline]
    pub fn from_nullable(value: std::option::Option<A>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is the `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if `value` is an `Option<A>`, whichever variant it holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use hkt_std::data::option::Option;
    ///
    /// let candidate: Box<dyn Any> = Box::new(Option::<i32>::none());
    /// assert!(Option::<i32>::is_option(candidate.as_ref()));
    /// assert!(!Option::<i32>::is_option(&42));
    /// ```
    #[inline]
    pub fn is_option(value: &dyn Any) -> bool
    where
        A: 'static,
    {
        value.is::<Self>()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`. Reading a payload from `None` is a
    /// programming error; use [`get_or_else`](Option::get_or_else),
    /// [`fold`](Option::fold) or [`try_get`](Option::try_get) when absence is
    /// expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert_eq!(Option::some(42).get(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(self) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Option::get()` on a `None` value"),
        }
    }

    /// Borrows the contained value.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    #[inline]
    #[track_caller]
    pub const fn get_ref(&self) -> &A {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Option::get_ref()` on a `None` value"),
        }
    }

    /// Returns the contained value, or [`OptionError::NoSuchElement`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::NoSuchElement`] if this is `None`.
    #[inline]
    pub fn try_get(self) -> Result<A, OptionError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(OptionError::NoSuchElement),
        }
    }

    /// Returns the contained value, or evaluates `fallback`.
    ///
    /// `fallback` is only called for `None`.
    #[inline]
    pub fn get_or_else<Fallback>(self, fallback: Fallback) -> A
    where
        Fallback: FnOnce() -> A,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Returns `self` if it is `Some`, otherwise evaluates `that`.
    #[inline]
    pub fn or_else<That>(self, that: That) -> Self
    where
        That: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => that(),
        }
    }

    /// Borrows the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// let text = Option::some(String::from("hello"));
    /// assert_eq!(text.as_ref().map(|s| s.len()), Option::some(5));
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Option<&A> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Converts into the standard library's option.
    #[inline]
    pub fn into_std(self) -> std::option::Option<A> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns an iterator over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().into_std().into_iter()
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// `None` stays `None` and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert_eq!(Option::some(1).map(|n| n + 1), Option::some(2));
    /// assert_eq!(Option::<i32>::none().map(|n| n + 1), Option::none());
    /// ```
    #[inline]
    pub fn map<B, Function>(self, function: Function) -> Option<B>
    where
        Function: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Applies a function returning an option to the contained value.
    ///
    /// The result of `function` is returned as is, without another layer of
    /// wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// let doubled = Option::some(1).flat_map(|n| if n > 0 { Option::some(n * 2) } else { Option::none() });
    /// assert_eq!(doubled, Option::some(2));
    /// ```
    #[inline]
    pub fn flat_map<B, Function>(self, function: Function) -> Option<B>
    where
        Function: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Collapses one level of nesting: `flat_map(|inner| inner)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert_eq!(Option::some(Option::some(1)).flatten(), Option::some(1));
    /// assert_eq!(Option::some(Option::<i32>::none()).flatten(), Option::none());
    /// ```
    #[inline]
    pub fn flatten<B>(self) -> Option<B>
    where
        A: TypeEquals<Option<B>>,
    {
        self.flat_map(|inner: A| inner.cast())
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<Predicate>(self, predicate: Predicate) -> Self
    where
        Predicate: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns `true` if there is a value and it satisfies `predicate`.
    #[inline]
    pub fn exists<Predicate>(&self, predicate: Predicate) -> bool
    where
        Predicate: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the option by evaluating one of two branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// let describe = |option: Option<i32>| option.fold(|| "nothing".to_string(), |n| format!("got {n}"));
    /// assert_eq!(describe(Option::some(3)), "got 3");
    /// assert_eq!(describe(Option::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<B, IfEmpty, OnSome>(self, if_empty: IfEmpty, on_some: OnSome) -> B
    where
        IfEmpty: FnOnce() -> B,
        OnSome: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => if_empty(),
        }
    }

    /// Eliminates the option with a named pair of branches.
    ///
    /// This is [`fold`](Option::fold) with the branches given as [`Cases`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::{Cases, Option};
    ///
    /// let length = Option::some("four").match_with(Cases {
    ///     on_none: || 0,
    ///     on_some: |text: &str| text.len(),
    /// });
    /// assert_eq!(length, 4);
    /// ```
    #[inline]
    pub fn match_with<B, OnNone, OnSome>(self, cases: Cases<OnNone, OnSome>) -> B
    where
        OnNone: FnOnce() -> B,
        OnSome: FnOnce(A) -> B,
    {
        self.fold(cases.on_none, cases.on_some)
    }

    /// Folds the (at most one) contained value into `seed`.
    ///
    /// `None` returns `seed` unchanged.
    #[inline]
    pub fn reduce<B, Function>(self, seed: B, function: Function) -> B
    where
        Function: FnOnce(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(seed, value),
            Self::None => seed,
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Pairs two values; `None` if either side is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// assert_eq!(Option::some(1).product(Option::some('a')), Option::some((1, 'a')));
    /// assert_eq!(Option::some(1).product(Option::<char>::none()), Option::none());
    /// ```
    #[inline]
    pub fn product<B>(self, that: Option<B>) -> Option<(A, B)> {
        match (self, that) {
            (Self::Some(left), Option::Some(right)) => Option::Some((left, right)),
            _ => Option::None,
        }
    }

    /// Combines two values with a function; `None` if either side is `None`.
    #[inline]
    pub fn zip_with<B, C, Function>(self, that: Option<B>, function: Function) -> Option<C>
    where
        Function: FnOnce(A, B) -> C,
    {
        self.product(that).map(|(left, right)| function(left, right))
    }

    /// Collects this value followed by every value of `collection`.
    ///
    /// Returns `None` as soon as `self` or an element of `collection` is
    /// `None`; the remaining elements are not consumed. Otherwise the
    /// resulting vector starts with this value and follows iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// let many = Option::some(1).product_many(vec![Option::some(2), Option::some(3)]);
    /// assert_eq!(many, Option::some(vec![1, 2, 3]));
    /// ```
    pub fn product_many<Collection>(self, collection: Collection) -> Option<Vec<A>>
    where
        Collection: IntoIterator<Item = Self>,
    {
        let Self::Some(head) = self else {
            return Option::None;
        };
        std::iter::once(Self::Some(head)).chain(collection).collect()
    }

    /// Collects every value of `collection`, preserving iteration order.
    ///
    /// Returns `None` at the first `None` element without consuming the rest
    /// of `collection`. An empty collection gives `Some(vec![])`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// let all = Option::product_all(vec![Option::some(1), Option::some(2), Option::some(3)]);
    /// assert_eq!(all, Option::some(vec![1, 2, 3]));
    ///
    /// let gap = Option::product_all(vec![Option::some(1), Option::none(), Option::some(3)]);
    /// assert_eq!(gap, Option::none());
    /// ```
    pub fn product_all<Collection>(collection: Collection) -> Option<Vec<A>>
    where
        Collection: IntoIterator<Item = Self>,
    {
        collection.into_iter().collect()
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Compares two options, deciding payload equality with `strategy`.
    ///
    /// Two `None`s are equal; a `None` never equals a `Some`; two `Some`s are
    /// equal when `strategy` accepts their payloads. Pass a deep or
    /// domain-specific comparison when `PartialEq` is not the right notion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hkt_std::data::option::Option;
    ///
    /// let left = Option::some("Hello");
    /// let right = Option::some("hello");
    /// assert!(!left.equals(&right));
    /// assert!(left.equals_with(&right, |a, b| a.eq_ignore_ascii_case(b)));
    /// ```
    pub fn equals_with<Strategy>(&self, that: &Self, strategy: Strategy) -> bool
    where
        Strategy: FnOnce(&A, &A) -> bool,
    {
        match (self, that) {
            (Self::None, Self::None) => true,
            (Self::Some(left), Self::Some(right)) => strategy(left, right),
            _ => false,
        }
    }

    /// Compares two options using the payload's `PartialEq`.
    #[inline]
    pub fn equals(&self, that: &Self) -> bool
    where
        A: PartialEq,
    {
        self.equals_with(that, PartialEq::eq)
    }
}

impl<A> Tagged for Option<A> {
    const ID: &'static str = "Option";

    fn tag(&self) -> &'static str {
        match self {
            Self::Some(_) => "Some",
            Self::None => "None",
        }
    }
}

impl<A> Default for Option<A> {
    fn default() -> Self {
        Self::None
    }
}

impl<A: fmt::Debug> fmt::Debug for Option<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A> From<std::option::Option<A>> for Option<A> {
    #[inline]
    fn from(value: std::option::Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Option<A>> for std::option::Option<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        value.into_std()
    }
}

impl<A> IntoIterator for Option<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter()
    }
}

/// Collecting stops at the first `None`, which becomes the result.
impl<A, V> FromIterator<Option<A>> for Option<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Option<A>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Option::into_std)
            .collect::<std::option::Option<V>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn none_is_the_same_value_every_time() {
        assert_eq!(Option::<String>::none(), Option::<String>::none());
        assert_eq!(std::mem::size_of::<Option<()>>(), 1);
    }

    #[rstest]
    #[should_panic(expected = "called `Option::get()` on a `None` value")]
    fn get_on_none_panics() {
        let _ = Option::<i32>::none().get();
    }

    #[rstest]
    fn try_get_on_none_is_an_error() {
        let error = Option::<i32>::none().try_get().unwrap_err();
        assert!(matches!(error, OptionError::NoSuchElement));
        assert_eq!(error.to_string(), "no such element: the Option is None");
    }

    #[rstest]
    fn get_returns_the_stored_value_itself() {
        let boxed = Box::new(7);
        let address: *const i32 = &raw const *boxed;
        let returned = Option::some(boxed).get();
        assert!(std::ptr::eq(address, &raw const *returned));
    }

    #[rstest]
    fn get_or_else_is_lazy() {
        let calls = Cell::new(0);
        let value = Option::some(1).get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Option::some(4), Option::some(4))]
    #[case(Option::some(3), Option::none())]
    #[case(Option::none(), Option::none())]
    fn filter_keeps_matching_values(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.filter(|n| n % 2 == 0), expected);
    }

    #[rstest]
    #[case(Option::some(3), 10, 13)]
    #[case(Option::some(3), 0, 3)]
    #[case(Option::none(), 10, 10)]
    #[case(Option::none(), 0, 0)]
    fn reduce_folds_the_value_into_the_seed(
        #[case] input: Option<i32>,
        #[case] seed: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(input.reduce(seed, |accumulator, value| accumulator + value), expected);
    }

    #[rstest]
    #[case(Option::some(4), "some 4")]
    #[case(Option::none(), "empty")]
    fn fold_selects_the_branch(#[case] input: Option<i32>, #[case] expected: &str) {
        assert_eq!(input.fold(|| "empty".to_string(), |n| format!("some {n}")), expected);
    }

    #[rstest]
    fn product_many_keeps_head_first() {
        let many = Option::some(1).product_many(vec![Option::some(2), Option::some(3)]);
        assert_eq!(many, Option::some(vec![1, 2, 3]));
    }

    #[rstest]
    fn product_many_stops_pulling_after_the_first_none() {
        let pulled = Cell::new(0);
        let elements = [Option::some(2), Option::none(), Option::some(4)];
        let collection = elements.into_iter().inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(Option::some(1).product_many(collection), Option::none());
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn product_many_on_none_does_not_touch_the_collection() {
        let pulled = Cell::new(0);
        let collection = std::iter::repeat_with(|| {
            pulled.set(pulled.get() + 1);
            Option::some(1)
        });

        assert_eq!(Option::none().product_many(collection), Option::none());
        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    fn product_all_of_empty_collection_is_some_empty() {
        assert_eq!(Option::<i32>::product_all(Vec::new()), Option::some(vec![]));
    }

    #[rstest]
    fn equals_with_never_calls_strategy_for_mixed_variants() {
        let strategy_calls = Cell::new(0);
        let strategy = |_: &i32, _: &i32| {
            strategy_calls.set(strategy_calls.get() + 1);
            true
        };
        assert!(!Option::some(1).equals_with(&Option::none(), strategy));
        assert!(Option::<i32>::none().equals_with(&Option::none(), strategy));
        assert_eq!(strategy_calls.get(), 0);
    }

    #[rstest]
    fn tag_names_the_variant() {
        assert_eq!(Option::some(1).tag(), "Some");
        assert_eq!(Option::<i32>::none().tag(), "None");
        assert_eq!(<Option<i32> as Tagged>::ID, "Option");
    }

    #[rstest]
    fn std_conversions_round_trip() {
        let ours: Option<u8> = Some(3).into();
        let back: std::option::Option<u8> = ours.into();
        assert_eq!(back, Some(3));
    }

    #[rstest]
    fn debug_uses_variant_names() {
        assert_eq!(format!("{:?}", Option::some(1)), "Some(1)");
        assert_eq!(format!("{:?}", Option::<i32>::none()), "None");
    }
}
