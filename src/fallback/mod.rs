//! Fallback executors: collapse failure handling into a single call.
//!
//! This module provides wrappers that run a computation and deal with its
//! failure in one expression:
//!
//! - [`run_or_recover`] / [`perform_or_recover`]: fall back to a recovery
//!   computation that receives the failure
//! - [`run_or_fail`] / [`perform_or_fail`]: turn any failure into a
//!   [`WrappedFailure`] without recovering
//!
//! A computation fails when it returns `Err` or panics. The failure is handed
//! around as a [`Failure`], and an unrecovered failure is always returned as
//! a [`WrappedFailure`] whose cause is kept intact.
//!
//! # Examples
//!
//! ```rust
//! use terse::fallback::{run_or_fail, run_or_recover};
//! use std::convert::Infallible;
//!
//! fn divide(dividend: u32, divisor: u32) -> Result<u32, String> {
//!     dividend.checked_div(divisor).ok_or_else(|| "/ by zero".to_string())
//! }
//!
//! let result = run_or_recover(|| divide(1, 0), |_| Ok::<_, Infallible>(0));
//! assert_eq!(result, Ok(0));
//!
//! let wrapped = run_or_fail(|| divide(1, 0)).unwrap_err();
//! assert_eq!(wrapped.to_string(), "wrapped failure: / by zero");
//! ```

mod executor;
mod failure;

pub use executor::{perform_or_fail, perform_or_recover, run_or_fail, run_or_recover};
pub use failure::{Failure, PanicFailure, WrappedFailure};
