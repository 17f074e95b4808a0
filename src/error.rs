//! Error handling types for tsumugi
//!
//! Every variant is a precondition violation: the caller handed the model a
//! reference that does not exist in the snapshot it supplied. These are logic
//! errors in the caller, not recoverable runtime conditions, so the model
//! propagates them without retry or fallback.

use thiserror::Error;

/// Comprehensive error type for document model operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Block key not present in the content snapshot
    #[error("Block not found: {key}")]
    BlockNotFound { key: String },

    /// Entity key not present in the entity registry
    #[error("Entity not found: {key}")]
    EntityNotFound { key: String },

    /// A raw entity range does not fit the block it targets
    #[error("Invalid entity range in block {block}: {message}")]
    InvalidRange { block: String, message: String },
}

/// Result type for document model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Helper functions for common error patterns
impl ModelError {
    /// Create a block not found error
    pub fn block_not_found(key: impl ToString) -> Self {
        ModelError::BlockNotFound {
            key: key.to_string(),
        }
    }

    /// Create an entity not found error
    pub fn entity_not_found(key: impl ToString) -> Self {
        ModelError::EntityNotFound {
            key: key.to_string(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(block: impl ToString, message: impl Into<String>) -> Self {
        ModelError::InvalidRange {
            block: block.to_string(),
            message: message.into(),
        }
    }
}
