//! The `container!` macro for building a container from listed elements.
//!
//! This module provides the [`container!`] macro, the varargs-style companion
//! of [`from_elements`](crate::collection::from_elements).

/// Builds a new container of the kind produced by a factory, filled with the
/// listed elements.
///
/// Elements are moved into the container rather than cloned, so they do not
/// need to implement `Clone`.
///
/// # Syntax
///
/// - `container![factory]` - Returns `factory()`, an empty container
/// - `container![factory; a, b, c]` - Returns `factory()` extended with `a`, `b`, `c`
///
/// # Examples
///
/// ```
/// use terse::collection::LinkedSet;
/// use terse::container;
/// use std::collections::{BinaryHeap, VecDeque};
///
/// let set = container![LinkedSet::new; 1, 2, 3, 2];
/// assert_eq!(set.as_slice(), &[1, 2, 3]);
///
/// let queue = container![VecDeque::new; String::from("a"), String::from("b")];
/// assert_eq!(queue.len(), 2);
///
/// let heap: BinaryHeap<&str> = container![BinaryHeap::new];
/// assert!(heap.is_empty());
/// ```
#[macro_export]
macro_rules! container {
    // Factory only: an empty container
    ($factory:expr $(;)?) => {
        ($factory)()
    };

    // Factory and elements: extend the fresh container in order
    ($factory:expr; $($element:expr),+ $(,)?) => {{
        let mut container = ($factory)();
        ::core::iter::Extend::extend(&mut container, [$($element),+]);
        container
    }};
}
