//! Storage and use-case error types for quill-store.

use quill_config::ConfigError;
use quill_core::errors::CoreError;
use quill_genai::{GenerationError, StructuredError};
use thiserror::Error;

/// Errors from the store and the operations built on it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a stored value failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Keys name files, so they must be plain identifiers.
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    /// Validation or lookup failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A generation call whose outcome is returned directly rather than
    /// recorded on an invocation site.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Structured(#[from] StructuredError),
}

impl StoreError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::not_found(entity_type, id))
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Core(CoreError::Validation(message.into()))
    }
}
