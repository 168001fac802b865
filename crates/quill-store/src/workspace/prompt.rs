//! Free-form prompts.
//!
//! These share the `Prompt` site and record the error's own text on failure,
//! since there is no task-specific message to show.

use quill_core::request::RequestState;
use quill_genai::Transport;

use super::{Site, Workspace};
use crate::error::StoreError;
use crate::kv::KeyValueStore;

impl<T: Transport, S: KeyValueStore> Workspace<T, S> {
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when `prompt` is blank.
    pub async fn ask(
        &mut self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<&RequestState<String>, StoreError> {
        require_prompt(prompt)?;
        let ticket = self.begin(Site::Prompt);
        let outcome = self.client.generate(prompt, system_instruction).await;
        Ok(self.finish(Site::Prompt, ticket, None, outcome))
    }

    /// Streamed free prompt; see [`Self::write_streaming`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when `prompt` is blank.
    pub async fn ask_streaming<F>(
        &mut self,
        prompt: &str,
        system_instruction: Option<&str>,
        mut on_chunk: F,
    ) -> Result<&RequestState<String>, StoreError>
    where
        F: FnMut(&str),
    {
        require_prompt(prompt)?;
        let ticket = self.begin(Site::Prompt);
        let mut text = String::new();
        let streamed = self
            .client
            .generate_streaming(
                prompt,
                |chunk| {
                    text.push_str(chunk);
                    on_chunk(chunk);
                },
                system_instruction,
            )
            .await;
        let outcome = streamed.map(|()| text);
        Ok(self.finish(Site::Prompt, ticket, None, outcome))
    }

    /// JSON-mode prompt returning the parsed value directly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Structured`] when the call fails or the
    /// response is not JSON, carrying the raw text in the latter case.
    pub async fn ask_json(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<serde_json::Value, StoreError> {
        require_prompt(prompt)?;
        Ok(self
            .client
            .generate_structured(prompt, system_instruction)
            .await?)
    }

    /// Prompt about one inline image.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] when `prompt` or the image is empty.
    pub async fn describe_image(
        &mut self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<&RequestState<String>, StoreError> {
        require_prompt(prompt)?;
        if image_base64.is_empty() {
            return Err(StoreError::validation("image is empty"));
        }
        let ticket = self.begin(Site::Prompt);
        let outcome = self
            .client
            .generate_with_image(prompt, image_base64, mime_type)
            .await;
        Ok(self.finish(Site::Prompt, ticket, None, outcome))
    }
}

fn require_prompt(prompt: &str) -> Result<(), StoreError> {
    quill_core::errors::require_text("prompt", prompt).map_err(StoreError::from)
}
