//! Collection guards: emptiness, element counts and element predicates.
//!
//! Guards here only accept containers that can be measured and walked
//! repeatedly ([`Countable`], [`Elements`]). One-shot iterators are not
//! supported: collect them first, then guard the collection.

use crate::messages::{render, MessageKey};
use crate::presence::Whitespace;
use crate::{ErrorKind, GateState, Guard, GuardError};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

// ============================================================================
// Countable
// ============================================================================

/// Containers with a cheap, repeatable element count.
pub trait Countable {
    /// Template used when the container is empty.
    const EMPTY_KEY: MessageKey = MessageKey::CollectionEmpty;

    /// Number of elements.
    fn element_count(&self) -> usize;

    /// Whether there are no elements.
    #[inline]
    fn is_empty_container(&self) -> bool {
        self.element_count() == 0
    }
}

macro_rules! countable_by_len {
    ($( [$($generics:tt)*] $ty:ty ),+ $(,)?) => {
        $(
            impl<$($generics)*> Countable for $ty {
                #[inline]
                fn element_count(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

countable_by_len! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] Box<[T]>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
}

/// Strings count characters.
impl Countable for str {
    const EMPTY_KEY: MessageKey = MessageKey::StrEmpty;

    #[inline]
    fn element_count(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl Countable for String {
    const EMPTY_KEY: MessageKey = MessageKey::StrEmpty;

    #[inline]
    fn element_count(&self) -> usize {
        self.as_str().element_count()
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl Countable for Cow<'_, str> {
    const EMPTY_KEY: MessageKey = MessageKey::StrEmpty;

    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        self.is_empty()
    }
}

impl<C: Countable + ?Sized> Countable for &C {
    const EMPTY_KEY: MessageKey = C::EMPTY_KEY;

    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        (**self).is_empty_container()
    }
}

impl<C: Countable + ?Sized> Countable for &mut C {
    const EMPTY_KEY: MessageKey = C::EMPTY_KEY;

    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }

    #[inline]
    fn is_empty_container(&self) -> bool {
        (**self).is_empty_container()
    }
}

// ============================================================================
// Elements
// ============================================================================

/// Containers whose elements can be visited by reference, any number of times.
pub trait Elements: Countable {
    /// Element type.
    type Item;

    /// Visit every element.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

macro_rules! elements_by_iter {
    ($( [$($generics:tt)*] $ty:ty ),+ $(,)?) => {
        $(
            impl<$($generics)*> Elements for $ty {
                type Item = T;

                #[inline]
                fn elements(&self) -> impl Iterator<Item = &T> {
                    self.iter()
                }
            }
        )+
    };
}

elements_by_iter! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] Box<[T]>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
}

impl<C: Elements + ?Sized> Elements for &C {
    type Item = C::Item;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &C::Item> {
        (**self).elements()
    }
}

// ============================================================================
// MaybeStr
// ============================================================================

/// String-like elements that may be absent.
pub trait MaybeStr {
    /// The text, or `None` when absent.
    fn as_maybe_str(&self) -> Option<&str>;
}

impl MaybeStr for str {
    #[inline]
    fn as_maybe_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl MaybeStr for String {
    #[inline]
    fn as_maybe_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl MaybeStr for Cow<'_, str> {
    #[inline]
    fn as_maybe_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl<S: MaybeStr + ?Sized> MaybeStr for &S {
    #[inline]
    fn as_maybe_str(&self) -> Option<&str> {
        (**self).as_maybe_str()
    }
}

impl<S: MaybeStr> MaybeStr for Option<S> {
    #[inline]
    fn as_maybe_str(&self) -> Option<&str> {
        self.as_ref().and_then(MaybeStr::as_maybe_str)
    }
}

// ============================================================================
// Guards
// ============================================================================

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: Countable,
    E: From<GuardError>,
    G: GateState<'a>,
{
    #[inline]
    fn check_count<P>(self, limit: usize, violated: P, key: MessageKey) -> Result<T, E>
    where
        P: FnOnce(usize, usize) -> bool,
    {
        self.check(
            |v| violated(v.element_count(), limit),
            ErrorKind::BadArgument,
            |v| render(key, &[&v.element_count(), &limit]),
        )
    }

    /// Raise when there are fewer than `limit` elements.
    pub fn if_count_less_than(self, limit: usize) -> Result<T, E> {
        self.check_count(limit, |count, limit| count < limit, MessageKey::CollectionCountLessThan)
    }

    /// Raise when there are `limit` elements or fewer.
    pub fn if_count_less_than_or_equal_to(self, limit: usize) -> Result<T, E> {
        self.check_count(limit, |count, limit| count <= limit, MessageKey::CollectionCountLessThanOrEqual)
    }

    /// Raise when there are more than `limit` elements.
    pub fn if_count_more_than(self, limit: usize) -> Result<T, E> {
        self.check_count(limit, |count, limit| count > limit, MessageKey::CollectionCountMoreThan)
    }

    /// Raise when there are `limit` elements or more.
    pub fn if_count_more_than_or_equal_to(self, limit: usize) -> Result<T, E> {
        self.check_count(limit, |count, limit| count >= limit, MessageKey::CollectionCountMoreThanOrEqual)
    }

    /// Raise when there are exactly `count` elements.
    pub fn if_count_is(self, count: usize) -> Result<T, E> {
        self.check_count(count, |actual, count| actual == count, MessageKey::CollectionCountIs)
    }

    /// Raise unless there are exactly `count` elements.
    pub fn if_count_is_not(self, count: usize) -> Result<T, E> {
        self.check_count(count, |actual, count| actual != count, MessageKey::CollectionCountIsNot)
    }
}

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: Elements,
    E: From<GuardError>,
    G: GateState<'a>,
{
    /// Raise when any element satisfies `predicate`.
    pub fn if_any_element<P>(self, mut predicate: P) -> Result<T, E>
    where
        P: FnMut(&T::Item) -> bool,
    {
        self.check(
            move |v| v.elements().any(|e| predicate(e)),
            ErrorKind::BadArgument,
            |_| render(MessageKey::CollectionItemAny, &[]),
        )
    }

    /// Raise when any element fails `predicate`.
    pub fn if_any_element_not<P>(self, mut predicate: P) -> Result<T, E>
    where
        P: FnMut(&T::Item) -> bool,
    {
        self.check(
            move |v| v.elements().any(|e| !predicate(e)),
            ErrorKind::BadArgument,
            |_| render(MessageKey::CollectionItemAnyNot, &[]),
        )
    }

    /// Raise when any string element is absent or empty.
    pub fn if_any_element_null_or_empty(self) -> Result<T, E>
    where
        T::Item: MaybeStr,
    {
        self.check(
            |v| v.elements().any(|e| e.as_maybe_str().is_none_or(str::is_empty)),
            ErrorKind::BadArgument,
            |_| render(MessageKey::CollectionItemNullOrEmpty, &[]),
        )
    }

    /// Raise when any string element is absent, empty or whitespace.
    pub fn if_any_element_null_or_whitespace(self) -> Result<T, E>
    where
        T::Item: MaybeStr,
    {
        self.check(
            |v| v.elements().any(|e| e.as_maybe_str().is_none_or(Whitespace::is_blank)),
            ErrorKind::BadArgument,
            |_| render(MessageKey::CollectionItemNullOrWhitespace, &[]),
        )
    }
}
