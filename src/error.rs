//! Error types for Jotter.

/// Errors from the todo store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    #[error("Todo not found: {id}")]
    NotFound { id: u64 },
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
