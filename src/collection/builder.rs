//! Generic container builders.
//!
//! Every builder takes a factory that produces an empty container of the
//! requested kind, so the same code serves `Vec::new`, `HashSet::new`,
//! `LinkedSet::new` or any other `Extend` implementation.

use super::source::Collection;

/// Builds a new container out of zero or more elements.
///
/// Returns `factory()` unchanged when `elements` is `None` or empty.
/// Otherwise every element is cloned into the new container, in order.
/// Whether duplicates collapse or order survives depends on the container.
///
/// The container only needs `Extend<T>`. When `elements` is `None` and the
/// container accepts both values and references (as `Vec` does), name the
/// element type with `None::<&[T]>`.
///
/// # Arguments
///
/// * `factory` - Produces an empty container (e.g. `Vec::new`).
/// * `elements` - The elements to copy, or `None`.
///
/// # Examples
///
/// ```rust
/// use terse::collection::from_elements;
/// use std::collections::{BinaryHeap, HashSet};
///
/// let heap: BinaryHeap<&str> = from_elements(BinaryHeap::new, Some(&["X", "Z", "Y"]));
/// assert_eq!(heap.peek(), Some(&"Z"));
///
/// let set: HashSet<Option<&str>> = from_elements(HashSet::new, Some(&[None, Some("1"), None]));
/// assert_eq!(set.len(), 2);
///
/// let empty: Vec<u8> = from_elements(Vec::new, None::<&[u8]>);
/// assert!(empty.is_empty());
/// ```
pub fn from_elements<C, T, F>(factory: F, elements: Option<&[T]>) -> C
where
    F: FnOnce() -> C,
    C: Extend<T>,
    T: Clone,
{
    let mut container = factory();

    let Some(elements) = elements.filter(|elements| !elements.is_empty()) else {
        tracing::trace!("no elements supplied, returning empty container");
        return container;
    };

    container.extend(elements.iter().cloned());
    tracing::trace!(copied = elements.len(), "built container from elements");
    container
}

/// Builds a new container by merging zero or more source containers.
///
/// `first` is copied first, followed by each entry of `more` in slice order.
/// Absent or empty sources are skipped. Each source is read in its own
/// iteration order and is never modified.
///
/// # Arguments
///
/// * `factory` - Produces an empty container (e.g. `VecDeque::new`).
/// * `first` - The first source, or `None`.
/// * `more` - Further sources, any of which may be `None`.
///
/// # Examples
///
/// ```rust
/// use terse::collection::{from_containers, vector};
/// use std::collections::VecDeque;
///
/// let head = vector(Some(&[1, 2]));
/// let tail = vector(Some(&[3, 4]));
///
/// let merged: VecDeque<i32> = from_containers(VecDeque::new, Some(&head), &[None, Some(&tail)]);
/// assert_eq!(merged, [1, 2, 3, 4]);
///
/// let nothing: Vec<i32> = from_containers(Vec::new, None::<&Vec<i32>>, &[None, None]);
/// assert!(nothing.is_empty());
/// ```
pub fn from_containers<C, S, F>(factory: F, first: Option<&S>, more: &[Option<&S>]) -> C
where
    F: FnOnce() -> C,
    S: Collection + ?Sized,
    S::Item: Clone,
    C: Extend<S::Item>,
{
    let mut container = factory();
    let mut copied_sources = 0_usize;
    let mut copied_elements = 0_usize;

    for source in std::iter::once(first)
        .chain(more.iter().copied())
        .filter(|source| has_at_least_one(*source))
        .flatten()
    {
        copy_into(&mut container, source);
        copied_sources += 1;
        copied_elements += source.size();
    }

    tracing::trace!(
        copied_sources,
        skipped_sources = more.len() + 1 - copied_sources,
        copied_elements,
        "built container from source containers"
    );
    container
}

fn copy_into<C, S>(container: &mut C, source: &S)
where
    S: Collection + ?Sized,
    S::Item: Clone,
    C: Extend<S::Item>,
{
    source.visit(&mut |element| container.extend(std::iter::once(element.clone())));
}

/// Returns `true` if `value` is absent or holds no elements.
///
/// Works for element slices and containers alike.
///
/// # Examples
///
/// ```rust
/// use terse::collection::is_absent_or_empty;
///
/// let empty: Vec<i32> = Vec::new();
/// assert!(is_absent_or_empty(Some(&empty)));
/// assert!(is_absent_or_empty(None::<&[i32]>));
/// assert!(!is_absent_or_empty(Some(&[1, 2, 3])));
/// ```
#[inline]
#[must_use]
pub fn is_absent_or_empty<S: Collection + ?Sized>(value: Option<&S>) -> bool {
    value.is_none_or(|value| value.is_empty())
}

/// Returns `true` if `value` is present and holds at least one element.
///
/// The exact negation of [`is_absent_or_empty`].
///
/// # Examples
///
/// ```rust
/// use terse::collection::has_at_least_one;
/// use std::collections::HashSet;
///
/// let set: HashSet<i32> = HashSet::new();
/// assert!(!has_at_least_one(Some(&set)));
/// assert!(has_at_least_one(Some(&vec!["a"])));
/// ```
#[inline]
#[must_use]
pub fn has_at_least_one<S: Collection + ?Sized>(value: Option<&S>) -> bool {
    !is_absent_or_empty(value)
}
