//! Application state: the four collections plus the citation style.
//!
//! Loaded once from a [`KeyValueStore`]. Every setter replaces a collection
//! wholesale and writes it back under its key before the in-memory copy
//! changes, so a failed write leaves the previous value in place.

use quill_core::entities::{Article, ProjectGoal, Reference, Task};
use quill_core::enums::CitationStyle;

use crate::error::StoreError;
use crate::kv::{KeyValueStore, load_or_default, save};

pub const KEY_ARTICLES: &str = "articles";
pub const KEY_REFERENCES: &str = "references";
pub const KEY_TASKS: &str = "tasks";
pub const KEY_GOALS: &str = "goals";
pub const KEY_CITATION_STYLE: &str = "citationStyle";

#[derive(Debug)]
pub struct AppState<S> {
    store: S,
    articles: Vec<Article>,
    references: Vec<Reference>,
    tasks: Vec<Task>,
    goals: Vec<ProjectGoal>,
    citation_style: CitationStyle,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load every key, using empty collections and `default_style` for
    /// anything missing or unreadable.
    pub fn load(store: S, default_style: CitationStyle) -> Self {
        let state = Self {
            articles: load_or_default(&store, KEY_ARTICLES, Vec::new()),
            references: load_or_default(&store, KEY_REFERENCES, Vec::new()),
            tasks: load_or_default(&store, KEY_TASKS, Vec::new()),
            goals: load_or_default(&store, KEY_GOALS, Vec::new()),
            citation_style: load_or_default(&store, KEY_CITATION_STYLE, default_style),
            store,
        };
        tracing::debug!(
            articles = state.articles.len(),
            references = state.references.len(),
            tasks = state.tasks.len(),
            goals = state.goals.len(),
            style = %state.citation_style,
            "state loaded"
        );
        state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn goals(&self) -> &[ProjectGoal] {
        &self.goals
    }

    #[must_use]
    pub const fn citation_style(&self) -> CitationStyle {
        self.citation_style
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn set_articles(&mut self, articles: Vec<Article>) -> Result<(), StoreError> {
        save(&self.store, KEY_ARTICLES, &articles)?;
        self.articles = articles;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn set_references(&mut self, references: Vec<Reference>) -> Result<(), StoreError> {
        save(&self.store, KEY_REFERENCES, &references)?;
        self.references = references;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), StoreError> {
        save(&self.store, KEY_TASKS, &tasks)?;
        self.tasks = tasks;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn set_goals(&mut self, goals: Vec<ProjectGoal>) -> Result<(), StoreError> {
        save(&self.store, KEY_GOALS, &goals)?;
        self.goals = goals;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written.
    pub fn set_citation_style(&mut self, style: CitationStyle) -> Result<(), StoreError> {
        save(&self.store, KEY_CITATION_STYLE, &style)?;
        self.citation_style = style;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn empty_store_loads_defaults() {
        let state = AppState::load(MemoryStore::new(), CitationStyle::Abnt);
        assert!(state.articles().is_empty());
        assert!(state.tasks().is_empty());
        assert_eq!(state.citation_style(), CitationStyle::Abnt);
    }

    #[test]
    fn unknown_style_falls_back() {
        let store = MemoryStore::new();
        store.set(KEY_CITATION_STYLE, "\"MLA\"").unwrap();
        let state = AppState::load(store, CitationStyle::Apa);
        assert_eq!(state.citation_style(), CitationStyle::Apa);
    }

    #[test]
    fn setters_persist_under_their_keys() {
        let mut state = AppState::load(MemoryStore::new(), CitationStyle::Apa);
        state.set_citation_style(CitationStyle::Abnt).unwrap();
        state.set_goals(Vec::new()).unwrap();
        assert_eq!(
            state.store().get(KEY_CITATION_STYLE).unwrap().as_deref(),
            Some("\"ABNT\"")
        );
        assert_eq!(state.store().get(KEY_GOALS).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn reload_sees_persisted_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::kv::FileStore::new(dir.path()).unwrap();
        let mut state = AppState::load(store, CitationStyle::Apa);
        state.set_citation_style(CitationStyle::Abnt).unwrap();

        let store = crate::kv::FileStore::new(dir.path()).unwrap();
        let reloaded = AppState::load(store, CitationStyle::Apa);
        assert_eq!(reloaded.citation_style(), CitationStyle::Abnt);
    }
}
