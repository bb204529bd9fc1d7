//! Error types for history log operations.

/// Errors raised by [`HistoryLog`](crate::areas::history_log::HistoryLog) operations.
///
/// Every variant is raised before any state changes, so a failed call leaves
/// the logs involved untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// A required argument was empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HistoryError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        HistoryError::InvalidArgument(reason.into())
    }
}
