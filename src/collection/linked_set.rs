//! Insertion-ordered unique set with automatic state transitions.
//!
//! This module provides [`LinkedSet`], a mutable set that remembers the order
//! in which elements were first inserted.
//!
//! # Overview
//!
//! `LinkedSet` keeps its elements in a contiguous buffer, in insertion order:
//! - Up to 8 elements are stored inline (`SmallVec`) and looked up linearly
//! - Beyond 8 elements the buffer moves to a `Vec` with a hash index on the side
//! - Removing elements back down to 8 or fewer returns to inline storage
//!
//! Inserting an element that is already present leaves the set (and the
//! element's position) unchanged.
//!
//! # Time Complexity
//!
//! | Operation  | Small (n <= 8) | Large (n > 8)  |
//! |------------|----------------|----------------|
//! | `insert`   | O(n)           | O(1) expected  |
//! | `contains` | O(n)           | O(1) expected  |
//! | `remove`   | O(n)           | O(n)           |
//! | `len`      | O(1)           | O(1)           |
//! | `iter`     | O(1) + O(n)    | O(1) + O(n)    |
//!
//! # Examples
//!
//! ```rust
//! use terse::collection::LinkedSet;
//!
//! let mut set = LinkedSet::new();
//! set.insert("c");
//! set.insert("a");
//! set.insert("c");
//! set.insert("b");
//!
//! let ordered: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(ordered, vec!["c", "a", "b"]);
//! ```
//!
//! # State Transitions
//!
//! ```text
//!                    insert (n < 8)
//!     Empty ─────────────────────────────► Small
//!       ▲                                    │
//!       │ remove (n == 0)                    │ insert (n == 8)
//!       │                                    ▼
//!       └─────────────── Small ◄──────── Large
//!                     remove (n == 8)
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, RandomState};

use super::source::Collection;

/// The threshold for transitioning between Small and Large states.
/// Sets with more than this many elements keep a hash index.
const SMALL_THRESHOLD: usize = 8;

/// Insertion-ordered entries plus a hash index from element hash to positions.
#[derive(Clone)]
struct IndexedVec<T> {
    entries: Vec<T>,
    index: HashMap<u64, SmallVec<[usize; 2]>>,
    hasher: RandomState,
}

impl<T> IndexedVec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Hash + Eq> IndexedVec<T> {
    /// `entries` must not contain duplicates.
    fn from_entries(entries: Vec<T>) -> Self {
        let hasher = RandomState::new();
        let mut index: HashMap<u64, SmallVec<[usize; 2]>> = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index
                .entry(hasher.hash_one(entry))
                .or_default()
                .push(position);
        }
        Self {
            entries,
            index,
            hasher,
        }
    }

    fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(&self.hasher.hash_one(element))?
            .iter()
            .copied()
            .find(|&position| self.entries[position].borrow() == element)
    }

    fn insert(&mut self, element: T) -> bool {
        if self.position(&element).is_some() {
            return false;
        }
        let hash = self.hasher.hash_one(&element);
        self.index.entry(hash).or_default().push(self.entries.len());
        self.entries.push(element);
        true
    }

    fn remove<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.position(element)?;
        let hash = self.hasher.hash_one(element);

        if let Some(bucket) = self.index.get_mut(&hash) {
            bucket.retain(|candidate| *candidate != position);
            if bucket.is_empty() {
                self.index.remove(&hash);
            }
        }

        // Every entry after the removed one shifts left by one.
        for bucket in self.index.values_mut() {
            for candidate in bucket.iter_mut().filter(|candidate| **candidate > position) {
                *candidate -= 1;
            }
        }

        Some(self.entries.remove(position))
    }
}

/// Internal representation of the set state.
#[derive(Clone)]
enum LinkedSetInner<T> {
    Empty,
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    Large(IndexedVec<T>),
}

/// A mutable set that iterates in insertion order.
///
/// This set transitions between three states based on size:
/// - Empty: No elements
/// - Small: Up to 8 elements stored inline in a `SmallVec`
/// - Large: More than 8 elements stored in a `Vec` with a hash index
///
/// Equality ignores order: two sets are equal when they hold the same elements.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Hash` and `Eq`.
///
/// # Examples
///
/// ```rust
/// use terse::collection::LinkedSet;
///
/// let set: LinkedSet<i32> = [3, 1, 3, 2].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct LinkedSet<T> {
    inner: LinkedSetInner<T>,
}

impl<T> LinkedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::LinkedSet;
    ///
    /// let set: LinkedSet<i32> = LinkedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: LinkedSetInner::Empty,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.inner {
            LinkedSetInner::Empty => 0,
            LinkedSetInner::Small(vec) => vec.len(),
            LinkedSetInner::Large(indexed) => indexed.len(),
        }
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, LinkedSetInner::Empty)
    }

    /// Returns the elements as a slice, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::LinkedSet;
    ///
    /// let set: LinkedSet<char> = "hello".chars().collect();
    /// assert_eq!(set.as_slice(), &['h', 'e', 'l', 'o']);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.inner {
            LinkedSetInner::Empty => &[],
            LinkedSetInner::Small(vec) => vec.as_slice(),
            LinkedSetInner::Large(indexed) => indexed.entries.as_slice(),
        }
    }

    /// Returns the earliest inserted element still present.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the most recently inserted element still present.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> LinkedSetIterator<'_, T> {
        LinkedSetIterator {
            inner: self.as_slice().iter(),
        }
    }

    /// Removes every element, returning to the Empty state.
    #[inline]
    pub fn clear(&mut self) {
        self.inner = LinkedSetInner::Empty;
    }

    /// Returns `true` if the set is in the Small state.
    ///
    /// This is primarily useful for testing state transitions.
    #[cfg(test)]
    const fn is_small_state(&self) -> bool {
        matches!(self.inner, LinkedSetInner::Small(_))
    }

    /// Returns `true` if the set is in the Large state.
    ///
    /// This is primarily useful for testing state transitions.
    #[cfg(test)]
    const fn is_large_state(&self) -> bool {
        matches!(self.inner, LinkedSetInner::Large(_))
    }
}

impl<T: Hash + Eq> LinkedSet<T> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// Supports borrowed forms of the element type, so a `LinkedSet<String>`
    /// can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::LinkedSet;
    ///
    /// let set: LinkedSet<String> = ["hello".to_string()].into_iter().collect();
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.inner {
            LinkedSetInner::Empty => false,
            LinkedSetInner::Small(vec) => vec.iter().any(|item| item.borrow() == element),
            LinkedSetInner::Large(indexed) => indexed.position(element).is_some(),
        }
    }

    /// Inserts an element at the end of the insertion order.
    ///
    /// Returns `false`, leaving the set untouched, if an equal element is
    /// already present.
    ///
    /// # State Transitions
    ///
    /// - `Empty` -> `Small` when inserting the first element
    /// - `Small` -> `Large` when inserting the 9th element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::LinkedSet;
    ///
    /// let mut set = LinkedSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.insert(2));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.as_slice(), &[1, 2]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match &mut self.inner {
            LinkedSetInner::Empty => {
                let mut vec = SmallVec::new();
                vec.push(element);
                self.inner = LinkedSetInner::Small(vec);
                true
            }
            LinkedSetInner::Small(vec) => {
                if vec.iter().any(|item| item == &element) {
                    return false;
                }

                if vec.len() >= SMALL_THRESHOLD {
                    let mut entries = std::mem::take(vec).into_vec();
                    entries.push(element);
                    self.inner = LinkedSetInner::Large(IndexedVec::from_entries(entries));
                } else {
                    vec.push(element);
                }
                true
            }
            LinkedSetInner::Large(indexed) => indexed.insert(element),
        }
    }

    /// Removes an element, keeping the relative order of the others.
    ///
    /// Returns `true` if the element was present.
    ///
    /// # State Transitions
    ///
    /// - `Small` -> `Empty` when removing the last element
    /// - `Large` -> `Small` when size drops to 8 or fewer elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::LinkedSet;
    ///
    /// let mut set: LinkedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &mut self.inner {
            LinkedSetInner::Empty => false,
            LinkedSetInner::Small(vec) => {
                let Some(position) = vec.iter().position(|item| item.borrow() == element) else {
                    return false;
                };
                vec.remove(position);
                if vec.is_empty() {
                    self.inner = LinkedSetInner::Empty;
                }
                true
            }
            LinkedSetInner::Large(indexed) => {
                if indexed.remove(element).is_none() {
                    return false;
                }
                if indexed.len() <= SMALL_THRESHOLD {
                    let vec: SmallVec<[T; SMALL_THRESHOLD]> =
                        std::mem::take(&mut indexed.entries).into_iter().collect();
                    self.inner = if vec.is_empty() {
                        LinkedSetInner::Empty
                    } else {
                        LinkedSetInner::Small(vec)
                    };
                }
                true
            }
        }
    }
}

impl<T> Default for LinkedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over references to the elements of a [`LinkedSet`].
pub struct LinkedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for LinkedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for LinkedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for LinkedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`LinkedSet`].
pub struct LinkedSetIntoIterator<T> {
    inner: LinkedSetIntoIteratorInner<T>,
}

enum LinkedSetIntoIteratorInner<T> {
    Empty,
    Small(smallvec::IntoIter<[T; SMALL_THRESHOLD]>),
    Large(std::vec::IntoIter<T>),
}

impl<T> Iterator for LinkedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            LinkedSetIntoIteratorInner::Empty => None,
            LinkedSetIntoIteratorInner::Small(iterator) => iterator.next(),
            LinkedSetIntoIteratorInner::Large(iterator) => iterator.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            LinkedSetIntoIteratorInner::Empty => (0, Some(0)),
            LinkedSetIntoIteratorInner::Small(iterator) => iterator.size_hint(),
            LinkedSetIntoIteratorInner::Large(iterator) => iterator.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for LinkedSetIntoIterator<T> {}

impl<T> IntoIterator for LinkedSet<T> {
    type Item = T;
    type IntoIter = LinkedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedSetIntoIterator {
            inner: match self.inner {
                LinkedSetInner::Empty => LinkedSetIntoIteratorInner::Empty,
                LinkedSetInner::Small(vec) => LinkedSetIntoIteratorInner::Small(vec.into_iter()),
                LinkedSetInner::Large(indexed) => {
                    LinkedSetIntoIteratorInner::Large(indexed.entries.into_iter())
                }
            },
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSet<T> {
    type Item = &'a T;
    type IntoIter = LinkedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> FromIterator<T> for LinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for LinkedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedSet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq> PartialEq for LinkedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq> Eq for LinkedSet<T> {}

impl<T> Collection for LinkedSet<T> {
    type Item = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T)) {
        self.iter().for_each(visitor);
    }
}
