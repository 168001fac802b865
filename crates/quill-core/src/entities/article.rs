use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::non_blank;
use crate::errors::{CoreError, require_text};
use crate::ids::{PREFIX_ARTICLE, generate_id};

/// A tracked scholarly article.
///
/// `summary` is only ever written by a successful summary generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// User-supplied article fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub authors: String,
    pub abstract_text: String,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl ArticleDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)
    }
}

impl Article {
    /// Build a new article with a fresh ID and no summary.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the draft is invalid.
    pub fn create(draft: ArticleDraft) -> Result<Self, CoreError> {
        draft.validate()?;
        Ok(Self {
            id: generate_id(PREFIX_ARTICLE),
            title: draft.title,
            authors: draft.authors,
            abstract_text: draft.abstract_text,
            url: non_blank(draft.url),
            notes: non_blank(draft.notes),
            file_path: None,
            summary: None,
        })
    }

    /// Replace the user-editable fields, keeping `id`, `file_path` and `summary`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the draft is invalid.
    pub fn apply(&self, draft: ArticleDraft) -> Result<Self, CoreError> {
        draft.validate()?;
        Ok(Self {
            title: draft.title,
            authors: draft.authors,
            abstract_text: draft.abstract_text,
            url: non_blank(draft.url),
            notes: non_blank(draft.notes),
            ..self.clone()
        })
    }

    /// Current user-editable fields as a draft (starting point for edits).
    #[must_use]
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            authors: self.authors.clone(),
            abstract_text: self.abstract_text.clone(),
            url: self.url.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Whether the article has enough text (abstract or notes) to summarize.
    #[must_use]
    pub fn has_summary_source(&self) -> bool {
        !self.abstract_text.trim().is_empty()
            || self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Text handed to the summarizer: abstract, then notes, then title.
    #[must_use]
    pub fn summary_source(&self) -> &str {
        if !self.abstract_text.trim().is_empty() {
            return &self.abstract_text;
        }
        match self.notes.as_deref() {
            Some(notes) if !notes.trim().is_empty() => notes,
            _ => &self.title,
        }
    }
}
