//! # terse
//!
//! Boilerplate-free helpers for two everyday chores:
//!
//! - **Collections**: build a new, owned, mutable container from a handful of
//!   elements or by merging existing containers, where absent inputs simply
//!   count as empty.
//! - **Fallbacks**: run a computation and turn its failure (an `Err` or a
//!   panic) into either a recovered value or a single wrapped failure.
//!
//! ## Feature Flags
//!
//! - `collection`: Container builders, `LinkedSet` and `ConcurrentSet`
//! - `fallback`: Fallback executors and failure types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use terse::prelude::*;
//!
//! let first = linked_set(Some(&[1, 2, 3]));
//! let second = linked_set(Some(&[3, 4, 5]));
//! let union = linked_set_merged(Some(&first), &[Some(&second)]);
//! assert_eq!(union.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//!
//! let divisor = 0;
//! let quotient = run_or_recover(
//!     || 1_i32.checked_div(divisor).ok_or("division by zero"),
//!     |_| Ok::<_, std::convert::Infallible>(-1),
//! );
//! assert_eq!(quotient.ok(), Some(-1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use terse::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "fallback")]
    pub use crate::fallback::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "fallback")]
pub mod fallback;
