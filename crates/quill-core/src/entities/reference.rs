use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::enums::AbntType;
use crate::errors::{CoreError, require_text};
use crate::ids::{PREFIX_REFERENCE, generate_id};

/// A bibliographic reference.
///
/// References are immutable once created; changes go through a full replace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    /// e.g. `"SOBRENOME, Nome A.; SOBRENOME, Nome B."` or `"Author, A. A., & Author, B. B."`.
    pub authors: String,
    pub year: String,
    pub title: String,
    /// Journal with volume/issue/pages, or `City: Publisher`.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abnt_type: Option<AbntType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_pages: Option<String>,
}

/// User-supplied reference fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDraft {
    pub authors: String,
    pub year: String,
    pub title: String,
    pub source: String,
    pub doi: Option<String>,
    pub abnt_type: Option<AbntType>,
    pub edition: Option<String>,
    pub local: Option<String>,
    pub publisher: Option<String>,
    pub pages: Option<String>,
    pub journal_volume: Option<String>,
    pub journal_issue: Option<String>,
    pub journal_pages: Option<String>,
}

impl ReferenceDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when authors, year, title or source is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("authors", &self.authors)?;
        require_text("year", &self.year)?;
        require_text("title", &self.title)?;
        require_text("source", &self.source)
    }
}

impl Reference {
    /// Build a reference with the given ID. Used for both creation and full replace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the draft is invalid.
    pub fn with_id(id: String, draft: ReferenceDraft) -> Result<Self, CoreError> {
        draft.validate()?;
        Ok(Self {
            id,
            authors: draft.authors,
            year: draft.year,
            title: draft.title,
            source: draft.source,
            doi: non_blank(draft.doi),
            abnt_type: draft.abnt_type,
            edition: non_blank(draft.edition),
            local: non_blank(draft.local),
            publisher: non_blank(draft.publisher),
            pages: non_blank(draft.pages),
            journal_volume: non_blank(draft.journal_volume),
            journal_issue: non_blank(draft.journal_issue),
            journal_pages: non_blank(draft.journal_pages),
        })
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the draft is invalid.
    pub fn create(draft: ReferenceDraft) -> Result<Self, CoreError> {
        Self::with_id(generate_id(PREFIX_REFERENCE), draft)
    }
}
