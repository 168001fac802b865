//! Cross-cutting error types for Quill.
//!
//! Errors that can originate from any crate in the system. Generation errors
//! live in `quill-genai` and storage errors in `quill-store`; the binary
//! converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Quill crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Local input validation failed. Raised before any outbound call.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// Reject blank required text fields.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming `field` when `value` is empty or
/// whitespace only.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        let err = require_text("title", "   ").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: title is required");
    }

    #[test]
    fn non_blank_text_passes() {
        assert!(require_text("title", "X").is_ok());
    }

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = CoreError::not_found("article", "art-00000001");
        assert_eq!(err.to_string(), "Entity not found: article art-00000001");
    }
}
