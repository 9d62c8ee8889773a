//! Error types shared by container, box-layout and table operations.

use crate::layout::parser::ParseError;

/// Errors returned by structural and geometric operations.
///
/// Every operation that returns one of these leaves the widget tree untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A widget handle is stale, already owned elsewhere, or otherwise unusable
    /// for the requested operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An ordinal index is outside the valid range.
    #[error("index {index} out of range for {len} children")]
    OutOfRange { index: usize, len: usize },
    /// No child with the given name or handle exists.
    #[error("not found: {0}")]
    NotFound(String),
    /// A layout expression string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

impl LayoutError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        LayoutError::InvalidArgument(message.into())
    }
}
