//! Executors that turn failing computations into values or wrapped failures.
//!
//! Each executor runs a caller-supplied computation once, synchronously, on
//! the calling thread. A computation fails when it returns `Err` **or** when
//! it panics; panics are caught at the call boundary.
//!
//! ```text
//!   primary ──ok──► value
//!      │
//!      └─failure──► recovery ──ok──► value
//!                      │
//!                      └─failure──► WrappedFailure(recovery failure)
//! ```
//!
//! The executors never swallow a failure: it is either recovered from or
//! returned as a [`WrappedFailure`].
//!
//! # Panics
//!
//! Catching a panic does not silence it. The panic hook still runs first, so
//! the default hook prints the usual panic message to stderr even when the
//! panic is then recovered from. Install a quieter hook with
//! [`std::panic::set_hook`] if that output is unwanted.
//!
//! Panics are only caught when the build unwinds. Under `panic = "abort"` a
//! panicking computation aborts the process and no executor returns.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::failure::{Failure, PanicFailure, WrappedFailure};

/// Runs `computation`, converting both `Err` and panics into a [`Failure`].
fn attempt<V, E, F>(computation: F) -> Result<V, Failure<E>>
where
    F: FnOnce() -> Result<V, E>,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(Failure::Error(error)),
        Err(payload) => Err(Failure::Panic(PanicFailure::from_payload(payload.as_ref()))),
    }
}

/// Runs `primary`; if it fails, runs `recovery` with the failure instead.
///
/// Returns the primary's value on success, otherwise the recovery's value.
/// If the recovery fails too, its failure is returned as the cause of a
/// [`WrappedFailure`]. The primary's failure is dropped in that case; capture
/// it inside `recovery` if you need it.
///
/// # Arguments
///
/// * `primary` - The computation to run first.
/// * `recovery` - Runs only when `primary` fails, receiving that failure.
///
/// # Errors
///
/// Returns `WrappedFailure` when both `primary` and `recovery` fail.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::run_or_recover;
/// use std::convert::Infallible;
///
/// let parsed = run_or_recover(|| "42".parse::<i32>(), |_| Ok::<_, Infallible>(-1));
/// assert_eq!(parsed, Ok(42));
///
/// let fallback = run_or_recover(|| "x".parse::<i32>(), |_| Ok::<_, Infallible>(-1));
/// assert_eq!(fallback, Ok(-1));
///
/// let both_failed = run_or_recover(|| "x".parse::<i32>(), |_| "y".parse::<i32>());
/// assert!(both_failed.unwrap_err().cause().error().is_some());
/// ```
pub fn run_or_recover<V, E, E2, P, R>(primary: P, recovery: R) -> Result<V, WrappedFailure<E2>>
where
    P: FnOnce() -> Result<V, E>,
    R: FnOnce(Failure<E>) -> Result<V, E2>,
{
    match attempt(primary) {
        Ok(value) => Ok(value),
        Err(failure) => {
            tracing::debug!(kind = failure.kind(), "primary computation failed, running recovery");
            attempt(|| recovery(failure)).map_err(|failure| {
                tracing::debug!(kind = failure.kind(), "recovery failed, wrapping failure");
                WrappedFailure::new(failure)
            })
        }
    }
}

/// Side-effect-only form of [`run_or_recover`].
///
/// # Errors
///
/// Returns `WrappedFailure` when both `primary` and `recovery` fail.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::perform_or_recover;
/// use std::convert::Infallible;
///
/// let mut log = Vec::new();
/// let outcome = perform_or_recover(
///     || Err("primary failed"),
///     |failure| {
///         log.push(failure.to_string());
///         Ok::<_, Infallible>(())
///     },
/// );
/// assert!(outcome.is_ok());
/// assert_eq!(log, vec!["primary failed"]);
/// ```
pub fn perform_or_recover<E, E2, P, R>(primary: P, recovery: R) -> Result<(), WrappedFailure<E2>>
where
    P: FnOnce() -> Result<(), E>,
    R: FnOnce(Failure<E>) -> Result<(), E2>,
{
    run_or_recover(primary, recovery)
}

/// Runs `primary`, returning its value or its failure wrapped in a
/// [`WrappedFailure`]. No recovery is attempted.
///
/// # Errors
///
/// Returns `WrappedFailure` carrying the original failure when `primary`
/// returns `Err` or panics.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::run_or_fail;
/// use std::convert::Infallible;
///
/// assert_eq!(run_or_fail(|| "7".parse::<u8>()).ok(), Some(7));
///
/// let divisor = std::hint::black_box(0);
/// let failed = run_or_fail(|| Ok::<_, Infallible>(1 / divisor));
/// assert!(failed.unwrap_err().cause().is_panic());
/// ```
pub fn run_or_fail<V, E, P>(primary: P) -> Result<V, WrappedFailure<E>>
where
    P: FnOnce() -> Result<V, E>,
{
    attempt(primary).map_err(|failure| {
        tracing::debug!(kind = failure.kind(), "computation failed, wrapping failure");
        WrappedFailure::new(failure)
    })
}

/// Side-effect-only form of [`run_or_fail`].
///
/// # Errors
///
/// Returns `WrappedFailure` carrying the original failure when `primary`
/// returns `Err` or panics.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::perform_or_fail;
///
/// let failed = perform_or_fail(|| Err::<(), _>("no such element"));
/// assert_eq!(failed.unwrap_err().cause().error(), Some(&"no such element"));
/// ```
pub fn perform_or_fail<E, P>(primary: P) -> Result<(), WrappedFailure<E>>
where
    P: FnOnce() -> Result<(), E>,
{
    run_or_fail(primary)
}
