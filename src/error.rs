//! Error types shared by every module of the toolkit.
//!
//! Errors are limited to precondition violations detected at the point of
//! misuse. Errors produced by user callbacks are never wrapped: a callback
//! returning `Result` hands its value back to the caller unchanged.

use thiserror::Error;

/// Represents the errors raised by toolkit operations.
///
/// # Examples
///
/// ```rust
/// use underbar::Error;
///
/// let error = Error::invalid_argument("sort_by", "unknown property `age`");
/// assert_eq!(
///     format!("{error}"),
///     "invalid argument to sort_by: unknown property `age`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation was called with an argument that violates its
    /// preconditions, such as a property or method name the element does
    /// not define.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// A human readable description of the violation.
        reason: String,
    },

    /// The timer facility backing `delay` or `throttle` cannot accept work.
    #[error("scheduling unavailable: {reason}")]
    SchedulingUnavailable {
        /// Why the scheduler refused the task.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] for `operation`.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SchedulingUnavailable`].
    pub fn scheduling_unavailable(reason: impl Into<String>) -> Self {
        Self::SchedulingUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates the error reported when `name` is not a property of a record.
    pub(crate) fn unknown_property(operation: &'static str, name: &str) -> Self {
        Self::invalid_argument(operation, format!("unknown property `{name}`"))
    }

    /// Creates the error reported when `name` is not a method of an element.
    pub(crate) fn unknown_method(operation: &'static str, name: &str) -> Self {
        Self::invalid_argument(operation, format!("unknown method `{name}`"))
    }
}

/// A specialized `Result` type for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;
