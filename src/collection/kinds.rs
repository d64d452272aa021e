//! Shortcuts that bind the generic builders to one container kind each.
//!
//! Every kind comes in two flavours: `kind(elements)` copies an element
//! slice, `kind_merged(first, more)` merges source containers.

use std::collections::{BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use super::builder::{from_containers, from_elements};
use super::concurrent_set::ConcurrentSet;
use super::linked_set::LinkedSet;
use super::source::Collection;

macro_rules! define_kind {
    (
        $(#[$elements_doc:meta])*
        $kind:ident -> $container:ident<T> = $factory:expr;
        where T: $($bound:tt)+
    ) => {
        paste::paste! {
            $(#[$elements_doc])*
            #[must_use]
            pub fn $kind<T>(elements: Option<&[T]>) -> $container<T>
            where
                T: $($bound)+,
            {
                from_elements($factory, elements)
            }

            #[doc = concat!(
                "Merges zero or more source containers into a new `",
                stringify!($container),
                "`.\n\nAbsent or empty sources are skipped; see [`from_containers`]."
            )]
            #[must_use]
            pub fn [<$kind _merged>]<T, S>(first: Option<&S>, more: &[Option<&S>]) -> $container<T>
            where
                T: $($bound)+,
                S: Collection<Item = T> + ?Sized,
            {
                from_containers($factory, first, more)
            }
        }
    };
}

define_kind! {
    /// Builds a new `HashSet` (unique, unordered) from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::hash_set;
    ///
    /// let set = hash_set(Some(&[1, 2, 2, 3]));
    /// assert_eq!(set.len(), 3);
    /// ```
    hash_set -> HashSet<T> = HashSet::new;
    where T: Clone + Hash + Eq
}

define_kind! {
    /// Builds a new `LinkedSet` (unique, insertion-ordered) from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::linked_set;
    ///
    /// let set = linked_set(Some(&[3, 4, 5, 3]));
    /// assert_eq!(set.as_slice(), &[3, 4, 5]);
    /// ```
    linked_set -> LinkedSet<T> = LinkedSet::new;
    where T: Clone + Hash + Eq
}

define_kind! {
    /// Builds a new `ConcurrentSet` (unique, thread-safe) from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::concurrent_set;
    ///
    /// let set = concurrent_set(Some(&["Hello", "World"]));
    /// assert!(set.contains("Hello"));
    /// ```
    concurrent_set -> ConcurrentSet<T> = ConcurrentSet::new;
    where T: Clone + Hash + Eq
}

define_kind! {
    /// Builds a new `Vec` from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::vector;
    ///
    /// let mut numbers = vector(Some(&[1, 2]));
    /// numbers.push(3);
    /// assert_eq!(numbers, vec![1, 2, 3]);
    /// ```
    vector -> Vec<T> = Vec::new;
    where T: Clone
}

define_kind! {
    /// Builds a new `LinkedList` from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::linked_list;
    ///
    /// let list = linked_list(Some(&["a", "b"]));
    /// assert_eq!(list.front(), Some(&"a"));
    /// ```
    linked_list -> LinkedList<T> = LinkedList::new;
    where T: Clone
}

define_kind! {
    /// Builds a new `VecDeque` from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::deque;
    ///
    /// let queue = deque(Some(&['x', 'y']));
    /// assert_eq!(queue.back(), Some(&'y'));
    /// ```
    deque -> VecDeque<T> = VecDeque::new;
    where T: Clone
}

define_kind! {
    /// Builds a new `BinaryHeap` (largest element first) from zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use terse::collection::priority_queue;
    ///
    /// let heap = priority_queue(Some(&["X", "Z", "Y"]));
    /// assert_eq!(heap.into_sorted_vec(), vec!["X", "Y", "Z"]);
    /// ```
    priority_queue -> BinaryHeap<T> = BinaryHeap::new;
    where T: Clone + Ord
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_linked_set_merge_scenario() {
        let first = linked_list(Some(&[1, 2, 3]));
        let second = linked_set(Some(&[3, 4, 5]));

        let sources: [Option<&dyn Collection<Item = i32>>; 2] = [Some(&first), Some(&second)];
        let union = linked_set_merged(sources[0], &sources[1..]);
        assert_eq!(union.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_every_kind_is_empty_for_absent_input() {
        assert!(hash_set::<i32>(None).is_empty());
        assert!(linked_set::<i32>(None).is_empty());
        assert!(concurrent_set::<i32>(None).is_empty());
        assert!(vector::<i32>(None).is_empty());
        assert!(linked_list::<i32>(None).is_empty());
        assert!(deque::<i32>(None).is_empty());
        assert!(priority_queue::<i32>(None).is_empty());
    }

    #[rstest]
    fn test_every_merged_kind_is_empty_for_absent_sources() {
        let none: Option<&Vec<i32>> = None;
        assert!(hash_set_merged(none, &[none]).is_empty());
        assert!(linked_set_merged(none, &[none]).is_empty());
        assert!(concurrent_set_merged(none, &[none]).is_empty());
        assert!(vector_merged(none, &[none]).is_empty());
        assert!(linked_list_merged(none, &[none]).is_empty());
        assert!(deque_merged(none, &[none]).is_empty());
        assert!(priority_queue_merged(none, &[none]).is_empty());
    }

    #[rstest]
    fn test_vector_keeps_duplicates() {
        let first = vec![1, 1];
        let merged = vector_merged(Some(&first), &[Some(&first)]);
        assert_eq!(merged, vec![1, 1, 1, 1]);
    }

    #[rstest]
    fn test_concurrent_set_merged_deduplicates() {
        let first = vec!["Hello", "World"];
        let second = hash_set(Some(&["World", "!"]));
        let sources: [Option<&dyn Collection<Item = &str>>; 2] = [Some(&first), Some(&second)];
        let merged = concurrent_set_merged(sources[0], &sources[1..]);
        assert_eq!(merged.len(), 3);
    }
}
