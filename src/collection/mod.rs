//! Null-safe builders for mutable collections.
//!
//! This module provides factory functions that create a fresh, independently
//! owned container from zero or more elements, or by merging zero or more
//! existing containers:
//!
//! - [`from_elements`] / [`from_containers`]: generic builders driven by a
//!   factory such as `Vec::new` or `HashSet::new`
//! - Kind-specific shortcuts such as [`vector`], [`hash_set`], [`linked_set`]
//!   and their `*_merged` counterparts
//! - [`LinkedSet`]: a unique set that iterates in insertion order
//! - [`ConcurrentSet`]: a unique set that can be mutated from many threads
//! - [`Collection`]: the read-only view every source container implements
//!
//! Absent inputs (`None`) are treated exactly like empty ones. None of the
//! builders can fail and none of them mutate their inputs.
//!
//! # Examples
//!
//! ## Building From Elements
//!
//! ```rust
//! use terse::collection::{from_elements, vector};
//! use std::collections::VecDeque;
//!
//! let numbers = vector(Some(&[1, 2, 3]));
//! assert_eq!(numbers, vec![1, 2, 3]);
//!
//! let queue: VecDeque<&str> = from_elements(VecDeque::new, Some(&["a", "b"]));
//! assert_eq!(queue.front(), Some(&"a"));
//!
//! let empty: Vec<i32> = vector(None);
//! assert!(empty.is_empty());
//! ```
//!
//! ## Merging Containers
//!
//! ```rust
//! use terse::collection::{Collection, from_containers, hash_set, linked_list};
//! use std::collections::VecDeque;
//!
//! let letters = hash_set(Some(&["a", "b"]));
//! let more = linked_list(Some(&["c", "d"]));
//!
//! let sources: [Option<&dyn Collection<Item = &str>>; 2] = [Some(&letters), Some(&more)];
//! let merged: VecDeque<&str> = from_containers(VecDeque::new, None, &sources);
//! assert_eq!(merged.len(), 4);
//! assert_eq!(merged.back(), Some(&"d"));
//! ```

mod builder;
mod concurrent_set;
mod container_macro;
mod kinds;
mod linked_set;
mod source;

pub use builder::{from_containers, from_elements, has_at_least_one, is_absent_or_empty};
pub use concurrent_set::ConcurrentSet;
pub use kinds::{
    concurrent_set, concurrent_set_merged, deque, deque_merged, hash_set, hash_set_merged,
    linked_list, linked_list_merged, linked_set, linked_set_merged, priority_queue,
    priority_queue_merged, vector, vector_merged,
};
pub use linked_set::{LinkedSet, LinkedSetIntoIterator, LinkedSetIterator};
pub use source::Collection;
