//! Read-only view over source containers.
//!
//! Builders never care what kind of container they copy from, only how many
//! elements it holds and what those elements are. [`Collection`] captures
//! exactly that, and it is dyn-compatible so that containers of different
//! kinds can be merged in a single call.

use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};

/// A container whose elements can be read and counted.
///
/// # Examples
///
/// ```rust
/// use terse::collection::Collection;
/// use std::collections::HashSet;
///
/// fn total(sources: &[&dyn Collection<Item = i32>]) -> i32 {
///     let mut sum = 0;
///     for source in sources {
///         source.visit(&mut |element| sum += element);
///     }
///     sum
/// }
///
/// let list = vec![1, 2, 3];
/// let set: HashSet<i32> = [10].into_iter().collect();
/// assert_eq!(total(&[&list, &set]), 16);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Calls `visitor` once per element, in the container's iteration order.
    fn visit(&self, visitor: &mut dyn FnMut(&Self::Item));
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn visit(&self, visitor: &mut dyn FnMut(&Self::Item)) {
        (**self).visit(visitor);
    }
}

impl<T> Collection for [T] {
    type Item = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T)) {
        self.iter().for_each(visitor);
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T)) {
        self.iter().for_each(visitor);
    }
}

macro_rules! impl_collection_for_std {
    ($($container:ident),* $(,)?) => {
        $(
            impl<T> Collection for $container<T> {
                type Item = T;

                #[inline]
                fn size(&self) -> usize {
                    self.len()
                }

                fn visit(&self, visitor: &mut dyn FnMut(&T)) {
                    self.iter().for_each(visitor);
                }
            }
        )*
    };
}

impl_collection_for_std!(Vec, VecDeque, LinkedList, BTreeSet, BinaryHeap);

impl<T, S> Collection for HashSet<T, S> {
    type Item = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn visit(&self, visitor: &mut dyn FnMut(&T)) {
        self.iter().for_each(visitor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect<C: Collection + ?Sized>(source: &C) -> Vec<C::Item>
    where
        C::Item: Clone,
    {
        let mut elements = Vec::new();
        source.visit(&mut |element| elements.push(element.clone()));
        elements
    }

    #[rstest]
    fn test_slice_visits_in_order() {
        let slice: &[i32] = &[3, 1, 2];
        assert_eq!(slice.size(), 3);
        assert_eq!(collect(slice), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_array_size_is_length() {
        let array = [1, 2, 3, 4];
        assert_eq!(Collection::size(&array), 4);
        assert!(!Collection::is_empty(&array));
    }

    #[rstest]
    fn test_empty_vec_is_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(Collection::is_empty(&empty));
        assert!(collect(&empty).is_empty());
    }

    #[rstest]
    fn test_linked_list_visits_in_order() {
        let list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(collect(&list), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_btree_set_visits_sorted() {
        let set: BTreeSet<i32> = [5, 1, 3].into_iter().collect();
        assert_eq!(collect(&set), vec![1, 3, 5]);
    }

    #[rstest]
    fn test_reference_delegates() {
        let deque: VecDeque<i32> = [1, 2].into_iter().collect();
        let reference = &deque;
        assert_eq!(Collection::size(&reference), 2);
        assert_eq!(collect(&reference), vec![1, 2]);
    }

    #[rstest]
    fn test_heterogeneous_trait_objects() {
        let vector = vec![1, 2];
        let set: HashSet<i32> = [3].into_iter().collect();
        let sources: [&dyn Collection<Item = i32>; 2] = [&vector, &set];
        let total: usize = sources.iter().map(|source| source.size()).sum();
        assert_eq!(total, 3);
    }
}
