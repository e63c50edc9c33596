//! Error types for the set collection.
//!
//! Only two operations on a set can fail: removing an element that is not a
//! member ([`NotFoundError`]) and popping from an empty set
//! ([`EmptySetError`]). Both are local, synchronous, and recoverable, and a
//! failed call leaves the set unchanged. Every other operation is total,
//! including the whole algebra over empty operands.

/// Error returned when removing an element that is not in the set.
///
/// `Set::remove` fails with this error when the target element is absent;
/// callers use `remove` when absence is a programming error. `Set::discard`
/// is the non-failing alternative and should be preferred when absence is
/// expected.
///
/// # Examples
///
/// ```rust
/// use setars::collection::NotFoundError;
///
/// let error = NotFoundError {
///     element: "epsilon".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "set does not contain \"epsilon\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    /// The rendered form of the element that was not found.
    pub element: String,
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "set does not contain \"{}\"", self.element)
    }
}

impl std::error::Error for NotFoundError {}

/// Error returned when popping an element from an empty set.
///
/// `Set::pop` fails with this error when the set has zero elements. Callers
/// that want to avoid the failure path entirely can check `len() > 0`
/// beforehand.
///
/// # Examples
///
/// ```rust
/// use setars::collection::EmptySetError;
///
/// let error = EmptySetError;
/// assert_eq!(format!("{}", error), "cannot pop from an empty set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySetError;

impl std::fmt::Display for EmptySetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot pop from an empty set")
    }
}

impl std::error::Error for EmptySetError {}

/// Represents any error raised by a set operation.
///
/// This enum provides a unified error type for callers that funnel both
/// failure kinds through one `Result`. Each variant wraps the specific
/// error returned by the failing operation.
///
/// # Examples
///
/// ```rust
/// use setars::collection::{EmptySetError, SetError};
///
/// let error = SetError::from(EmptySetError);
/// assert_eq!(format!("{}", error), "cannot pop from an empty set");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The target element was not a member of the set.
    NotFound(NotFoundError),
    /// The set had no elements to pop.
    Empty(EmptySetError),
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(error) => write!(formatter, "{error}"),
            Self::Empty(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SetError {}

impl From<NotFoundError> for SetError {
    fn from(error: NotFoundError) -> Self {
        Self::NotFound(error)
    }
}

impl From<EmptySetError> for SetError {
    fn from(error: EmptySetError) -> Self {
        Self::Empty(error)
    }
}
