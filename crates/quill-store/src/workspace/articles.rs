//! Articles: CRUD and summary generation.

use quill_core::entities::{Article, ArticleDraft};
use quill_core::request::RequestState;
use quill_genai::prompts::{self, MISSING_SUMMARY_SOURCE, PromptTask};
use quill_genai::Transport;

use super::{Site, Workspace, find, replaced, without};
use crate::error::StoreError;
use crate::kv::KeyValueStore;

const ENTITY: &str = "article";

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        self.state.articles()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when no article has this id.
    pub fn article(&self, id: &str) -> Result<&Article, StoreError> {
        find(self.state.articles(), ENTITY, id)
    }

    /// Append a new article.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the draft is invalid or the write fails.
    pub fn add_article(&mut self, draft: ArticleDraft) -> Result<Article, StoreError> {
        let article = Article::create(draft)?;
        let mut articles = self.state.articles().to_vec();
        articles.push(article.clone());
        self.state.set_articles(articles)?;
        tracing::debug!(id = %article.id, "article added");
        Ok(article)
    }

    /// Replace the editable fields of an article. The summary is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the article is missing, the draft is
    /// invalid, or the write fails.
    pub fn edit_article(&mut self, id: &str, draft: ArticleDraft) -> Result<Article, StoreError> {
        let (articles, article) =
            replaced(self.state.articles(), ENTITY, id, |old| old.apply(draft))?;
        self.state.set_articles(articles)?;
        Ok(article)
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] when the article is missing or the write fails.
    pub fn delete_article(&mut self, id: &str) -> Result<(), StoreError> {
        let articles = without(self.state.articles(), ENTITY, id)?;
        self.state.set_articles(articles)
    }

    /// Generate and store a summary for an article.
    ///
    /// The article must have an abstract or notes; the text sent is the
    /// abstract, then the notes, then the title. On success the summary is
    /// persisted. On failure the summary site records a fixed message and
    /// the article is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when the article is missing or has no
    /// text to summarize (no call is made), and [`StoreError`] if persisting
    /// the summary fails.
    pub async fn summarize_article(&mut self, id: &str) -> Result<&RequestState<String>, StoreError> {
        let article = self.article(id)?;
        if !article.has_summary_source() {
            return Err(StoreError::validation(MISSING_SUMMARY_SOURCE));
        }
        let task = PromptTask::SummarizeArticle(article.summary_source());
        let message = task.failure_message();
        let prompt = prompts::build(task);

        let ticket = self.begin(Site::Summary);
        let outcome = self.client.generate(&prompt.text, prompt.system()).await;

        if let Ok(summary) = &outcome {
            let summary = summary.clone();
            let stored = replaced(self.state.articles(), ENTITY, id, |old| {
                Ok(Article {
                    summary: Some(summary),
                    ..old.clone()
                })
            })
            .and_then(|(articles, _)| self.state.set_articles(articles));
            if let Err(e) = stored {
                tracing::warn!(id, %e, "summary generated but not stored");
                self.sites.get_mut(Site::Summary).fail(ticket, message);
                return Err(e);
            }
        }
        Ok(self.finish(Site::Summary, ticket, Some(message), outcome))
    }
}
