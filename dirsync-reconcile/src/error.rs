//! Error types for directory operations.

use thiserror::Error;

/// Result type for a single directory operation.
pub type ServiceResult = Result<(), ServiceError>;

/// Errors an [`UpdateService`](crate::UpdateService) reports for one action.
///
/// The executor does not distinguish transient from permanent failures; any
/// error marks the action as failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The entity to update or delete does not exist.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// The entity to add already exists.
    #[error("{kind} already exists: {key}")]
    AlreadyExists { kind: &'static str, key: String },

    /// The directory refused the operation.
    #[error("rejected by directory: {0}")]
    Rejected(String),

    /// Transport or storage failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
