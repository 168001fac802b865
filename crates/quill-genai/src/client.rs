//! Generation client: one outbound call per invocation.
//!
//! No retries and no timeout of its own; the transport's configured timeout
//! is the only limit.

use futures::StreamExt;
use quill_config::GeminiConfig;
use serde::de::DeserializeOwned;

use crate::error::{GenerationError, StructuredError};
use crate::fence::parse_structured;
use crate::transport::{HttpTransport, Transport};
use crate::wire::GenerationRequest;

/// Issues generation requests for one model over a [`Transport`].
#[derive(Debug, Clone)]
pub struct GenerationClient<T = HttpTransport> {
    transport: T,
    model: String,
}

impl GenerationClient<HttpTransport> {
    /// Client over the REST transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(HttpTransport::from_config(config), config.model.clone())
    }
}

impl<T: Transport> GenerationClient<T> {
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single round trip returning the response text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on any transport or service failure.
    pub async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, GenerationError> {
        let request = GenerationRequest::text(&self.model, prompt, system_instruction);
        self.round_trip(request, "generate").await
    }

    /// Round trip in JSON mode, parsed into `D`.
    ///
    /// The response text may be wrapped in a code fence, which is stripped
    /// before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`StructuredError::Generation`] when the call fails and
    /// [`StructuredError::MalformedResponse`] when the text does not parse.
    pub async fn generate_structured<D: DeserializeOwned>(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<D, StructuredError> {
        let request =
            GenerationRequest::text(&self.model, prompt, system_instruction).json_mode();
        let raw = self.round_trip(request, "generate_structured").await?;
        parse_structured(&raw).inspect_err(|e| {
            tracing::warn!(model = %self.model, raw = %raw, %e, "structured response did not parse");
        })
    }

    /// Round trip with one text part and one inline image part.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on any transport or service failure.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, GenerationError> {
        let request = GenerationRequest::with_image(&self.model, prompt, image_base64, mime_type);
        self.round_trip(request, "generate_with_image").await
    }

    /// Streaming round trip. `on_chunk` runs once per received fragment, in
    /// arrival order, before the next fragment is read.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the stream cannot be opened or fails
    /// part-way; no chunk is delivered after the failure.
    pub async fn generate_streaming<F>(
        &self,
        prompt: &str,
        mut on_chunk: F,
        system_instruction: Option<&str>,
    ) -> Result<(), GenerationError>
    where
        F: FnMut(&str),
    {
        let request = GenerationRequest::text(&self.model, prompt, system_instruction);
        tracing::debug!(model = %self.model, prompt_len = request.prompt_len(), "generate_streaming");

        let mut chunks = self.transport.send_streaming(request).await.inspect_err(|e| {
            tracing::warn!(model = %self.model, %e, "generate_streaming failed");
        })?;

        let mut delivered = 0_usize;
        while let Some(fragment) = chunks.next().await {
            let fragment = fragment.inspect_err(|e| {
                tracing::warn!(model = %self.model, delivered, %e, "stream failed");
            })?;
            on_chunk(&fragment.text());
            delivered += 1;
        }
        tracing::debug!(model = %self.model, delivered, "stream complete");
        Ok(())
    }

    async fn round_trip(
        &self,
        request: GenerationRequest,
        operation: &'static str,
    ) -> Result<String, GenerationError> {
        tracing::debug!(model = %self.model, prompt_len = request.prompt_len(), operation);
        match self.transport.send(request).await {
            Ok(response) => Ok(response.text()),
            Err(e) => {
                tracing::warn!(model = %self.model, operation, %e, "generation failed");
                Err(e)
            }
        }
    }
}
