//! Error types for the entity model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while loading or validating directory state.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The same identity key appears twice within one collection.
    #[error("duplicate {kind} identity key: {key}")]
    DuplicateIdentity { kind: &'static str, key: String },

    /// Snapshot JSON could not be parsed or produced.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
