//! Writing helpers and the formatting guide.
//!
//! Each helper has its own invocation site, reports failures with its own
//! fixed message, and can run as a single round trip or streamed.

use quill_core::enums::CitationStyle;
use quill_core::request::RequestState;
use quill_genai::prompts::{self, MISSING_REVIEW_TEXT, PromptTask};
use quill_genai::Transport;

use super::{Site, Workspace};
use crate::error::StoreError;
use crate::kv::KeyValueStore;

const fn site_for(task: &PromptTask<'_>) -> Site {
    match task {
        PromptTask::SummarizeArticle(_) => Site::Summary,
        PromptTask::SectionTemplate(_) => Site::Template,
        PromptTask::ReviewText(_) => Site::Review,
        PromptTask::SuggestPhrases(_) => Site::Phrases,
        PromptTask::FormattingGuide(_) => Site::Guide,
    }
}

fn check_input(task: &PromptTask<'_>) -> Result<(), StoreError> {
    match task {
        PromptTask::ReviewText(text) if text.trim().is_empty() => {
            Err(StoreError::validation(MISSING_REVIEW_TEXT))
        }
        // A summary belongs to an article; only summarize_article may store one.
        PromptTask::SummarizeArticle(_) => Err(StoreError::validation(
            "article summaries are generated with summarize_article",
        )),
        _ => Ok(()),
    }
}

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    /// Run a prompt task as a single round trip on its site.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when review text is blank or the task is
    /// an article summary; no call is made. Generation failures are recorded
    /// on the site, not returned.
    pub async fn write(&mut self, task: PromptTask<'_>) -> Result<&RequestState<String>, StoreError> {
        check_input(&task)?;
        Ok(self.run(task).await)
    }

    /// Run a prompt task streamed, passing each fragment to `on_chunk` as it
    /// arrives. On success the site holds the concatenated text.
    ///
    /// # Errors
    ///
    /// Same as [`Self::write`].
    pub async fn write_streaming<F>(
        &mut self,
        task: PromptTask<'_>,
        mut on_chunk: F,
    ) -> Result<&RequestState<String>, StoreError>
    where
        F: FnMut(&str),
    {
        check_input(&task)?;
        let site = site_for(&task);
        let message = task.failure_message();
        let prompt = prompts::build(task);

        let ticket = self.begin(site);
        let mut text = String::new();
        let streamed = self
            .client
            .generate_streaming(
                &prompt.text,
                |chunk| {
                    text.push_str(chunk);
                    on_chunk(chunk);
                },
                prompt.system(),
            )
            .await;
        let outcome = streamed.map(|()| text);
        Ok(self.finish(site, ticket, Some(message), outcome))
    }

    /// Outline for a paper section. Unknown ids use a generic label.
    pub async fn section_template(&mut self, template_id: &str) -> &RequestState<String> {
        self.run(PromptTask::SectionTemplate(template_id)).await
    }

    /// Reviewed version of `text` with suggestions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when `text` is blank.
    pub async fn review_text(&mut self, text: &str) -> Result<&RequestState<String>, StoreError> {
        self.write(PromptTask::ReviewText(text)).await
    }

    /// Connective phrases for a writing context. Unknown ids use a generic label.
    pub async fn suggest_phrases(&mut self, context_id: &str) -> &RequestState<String> {
        self.run(PromptTask::SuggestPhrases(context_id)).await
    }

    /// How to format references in `style` (or the stored default).
    pub async fn formatting_guide(&mut self, style: Option<CitationStyle>) -> &RequestState<String> {
        let style = style.unwrap_or_else(|| self.citation_style());
        self.run(PromptTask::FormattingGuide(style)).await
    }

    async fn run(&mut self, task: PromptTask<'_>) -> &RequestState<String> {
        let site = site_for(&task);
        let message = task.failure_message();
        let prompt = prompts::build(task);

        let ticket = self.begin(site);
        let outcome = self.client.generate(&prompt.text, prompt.system()).await;
        self.finish(site, ticket, Some(message), outcome)
    }
}
