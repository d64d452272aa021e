//! Hash set that can be mutated from several threads at once.
//!
//! [`ConcurrentSet`] wraps a `HashSet` in a `parking_lot::RwLock`. Every
//! operation takes `&self`, so a set shared through `Arc` can be read and
//! written concurrently without extra coordination by the caller.
//!
//! # Examples
//!
//! ```rust
//! use terse::collection::ConcurrentSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(ConcurrentSet::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || {
//!             for value in 0..10 {
//!                 set.insert(worker * 10 + value);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(set.len(), 40);
//! ```

use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use super::source::Collection;

/// A unique, unordered set whose mutation is safe under concurrent access.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Hash` and `Eq`.
pub struct ConcurrentSet<T> {
    inner: RwLock<HashSet<T>>,
}

static_assertions::assert_impl_all!(ConcurrentSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(ConcurrentSet<String>: Send, Sync);

impl<T: Hash + Eq> ConcurrentSet<T> {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashSet::new()),
        }
    }

    /// Returns the number of elements at the time of the call.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the set held no elements at the time of the call.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns `true` if the set contains the specified element.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(element)
    }

    /// Adds an element. Returns `false` if it was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::new();
    /// assert!(set.insert("Hello"));
    /// assert!(!set.insert("Hello"));
    /// ```
    pub fn insert(&self, element: T) -> bool {
        self.inner.write().insert(element)
    }

    /// Removes an element. Returns `true` if it was present.
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(element)
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns a copy of the current elements, in no particular order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read().iter().cloned().collect()
    }

    /// Consumes the set and returns the underlying `HashSet`.
    #[must_use]
    pub fn into_inner(self) -> HashSet<T> {
        self.inner.into_inner()
    }
}

impl<T: Hash + Eq> Default for ConcurrentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ConcurrentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for ConcurrentSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.get_mut().extend(iter);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ConcurrentSet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.inner.read().iter()).finish()
    }
}

impl<T> Collection for ConcurrentSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.inner.read().len()
    }

    /// Visits a consistent snapshot: the read lock is held for the whole walk.
    fn visit(&self, visitor: &mut dyn FnMut(&T)) {
        self.inner.read().iter().for_each(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    #[rstest]
    fn test_new_is_empty() {
        let set: ConcurrentSet<i32> = ConcurrentSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_insert_deduplicates() {
        let set = ConcurrentSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_remove_and_contains() {
        let set: ConcurrentSet<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
        assert!(set.contains("a"));
        assert!(set.remove("a"));
        assert!(!set.contains("a"));
        assert!(!set.remove("a"));
    }

    #[rstest]
    fn test_clear_empties_set() {
        let set: ConcurrentSet<i32> = (0..5).collect();
        set.clear();
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_snapshot_is_independent() {
        let set: ConcurrentSet<i32> = [1, 2].into_iter().collect();
        let mut snapshot = set.snapshot();
        set.insert(3);
        snapshot.sort_unstable();
        assert_eq!(snapshot, vec![1, 2]);
    }

    #[rstest]
    fn test_concurrent_inserts_from_many_threads() {
        let set = Arc::new(ConcurrentSet::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    for value in 0..100 {
                        set.insert(value % 50 + worker * 1000);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(set.len(), 8 * 50);
    }

    #[rstest]
    fn test_extend_and_into_inner() {
        let mut set = ConcurrentSet::new();
        set.extend(["x", "y", "x"]);
        let inner = set.into_inner();
        assert_eq!(inner.len(), 2);
    }
}
