//! References and bibliography formatting.

use quill_core::citation::{format_bibliography, format_reference};
use quill_core::entities::{Reference, ReferenceDraft};
use quill_core::enums::CitationStyle;
use quill_genai::Transport;

use super::{Workspace, find, without};
use crate::error::StoreError;
use crate::kv::KeyValueStore;

const ENTITY: &str = "reference";

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        self.state.references()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when no reference has this id.
    pub fn reference(&self, id: &str) -> Result<&Reference, StoreError> {
        find(self.state.references(), ENTITY, id)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the draft is invalid or the write fails.
    pub fn add_reference(&mut self, draft: ReferenceDraft) -> Result<Reference, StoreError> {
        let reference = Reference::create(draft)?;
        let mut references = self.state.references().to_vec();
        references.push(reference.clone());
        self.state.set_references(references)?;
        tracing::debug!(id = %reference.id, "reference added");
        Ok(reference)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the reference is missing or the write fails.
    pub fn delete_reference(&mut self, id: &str) -> Result<(), StoreError> {
        let references = without(self.state.references(), ENTITY, id)?;
        self.state.set_references(references)
    }

    /// The stored default style.
    #[must_use]
    pub const fn citation_style(&self) -> CitationStyle {
        self.state.citation_style()
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn set_citation_style(&mut self, style: CitationStyle) -> Result<(), StoreError> {
        self.state.set_citation_style(style)
    }

    /// One reference formatted in `style`, or in the stored default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when no reference has this id.
    pub fn citation(&self, id: &str, style: Option<CitationStyle>) -> Result<String, StoreError> {
        let style = style.unwrap_or_else(|| self.citation_style());
        Ok(format_reference(self.reference(id)?, style))
    }

    /// Every reference formatted in `style` (or the stored default), one per
    /// line, in collection order.
    #[must_use]
    pub fn bibliography(&self, style: Option<CitationStyle>) -> String {
        let style = style.unwrap_or_else(|| self.citation_style());
        format_bibliography(self.state.references(), style)
    }
}
