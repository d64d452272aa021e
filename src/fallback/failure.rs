//! Failure types for the fallback executors.
//!
//! A computation can fail in two ways: by returning `Err` or by panicking.
//! [`Failure`] captures either case, and [`WrappedFailure`] is the single
//! failure type returned when nothing recovered from it.

use std::any::Any;

/// A panic caught while running a computation.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::PanicFailure;
///
/// let failure = PanicFailure::new("attempt to divide by zero");
/// assert_eq!(format!("{failure}"), "panicked: attempt to divide by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicFailure {
    message: String,
}

impl PanicFailure {
    /// Creates a panic failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a panic payload.
    ///
    /// Payloads that are neither `&str` nor `String` become `"Unknown panic"`.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PanicFailure {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for PanicFailure {}

/// The failure of a single computation: either its `Err` value or a panic.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::Failure;
///
/// let failure: Failure<&str> = Failure::Error("not found");
/// assert_eq!(failure.kind(), "error");
/// assert_eq!(failure.into_error(), Some("not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<E> {
    /// The computation returned `Err`.
    Error(E),
    /// The computation panicked.
    Panic(PanicFailure),
}

impl<E> Failure<E> {
    /// Returns `"error"` or `"panic"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::Panic(_) => "panic",
        }
    }

    /// Returns `true` if the computation panicked.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }

    /// Returns a reference to the `Err` value, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Panic(_) => None,
        }
    }

    /// Converts into the `Err` value, if any.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Panic(_) => None,
        }
    }

    /// Transforms the `Err` value, leaving panics untouched.
    pub fn map_error<E2, F>(self, transform: F) -> Failure<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Error(error) => Failure::Error(transform(error)),
            Self::Panic(panic) => Failure::Panic(panic),
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for Failure<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(error) => write!(formatter, "{error}"),
            Self::Panic(panic) => write!(formatter, "{panic}"),
        }
    }
}

// Transparent: displays as the inner failure and forwards its source.
impl<E: std::error::Error + 'static> std::error::Error for Failure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Error(error) => error.source(),
            Self::Panic(_) => None,
        }
    }
}

/// The generic failure returned when a computation could not be recovered.
///
/// The failure that caused it is kept as a structured [`Failure`], reachable
/// through [`cause`](Self::cause) and through `Error::source`.
///
/// # Examples
///
/// ```rust
/// use terse::fallback::{Failure, WrappedFailure};
///
/// let wrapped = WrappedFailure::new(Failure::Error("disk full"));
/// assert_eq!(format!("{wrapped}"), "wrapped failure: disk full");
/// assert_eq!(wrapped.cause().error(), Some(&"disk full"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedFailure<E> {
    cause: Failure<E>,
}

impl<E> WrappedFailure<E> {
    /// Wraps the given failure.
    #[must_use]
    pub const fn new(cause: Failure<E>) -> Self {
        Self { cause }
    }

    /// Returns the failure that caused this one.
    #[must_use]
    pub const fn cause(&self) -> &Failure<E> {
        &self.cause
    }

    /// Converts into the failure that caused this one.
    #[must_use]
    pub fn into_cause(self) -> Failure<E> {
        self.cause
    }
}

impl<E: std::fmt::Display> std::fmt::Display for WrappedFailure<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "wrapped failure: {}", self.cause)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for WrappedFailure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
