//! Outbound transport for generation requests.
//!
//! [`Transport`] is the seam between [`GenerationClient`](crate::GenerationClient)
//! and the network. [`HttpTransport`] talks to the REST API; tests plug in a
//! scripted implementation.

use std::future::Future;
use std::time::Duration;

use futures::StreamExt;
use futures::stream::BoxStream;
use quill_config::GeminiConfig;

use crate::error::GenerationError;
use crate::http::{check_payload, check_response};
use crate::sse::decode_events;
use crate::wire::{GenerateContentResponse, GenerationRequest, RestRequest};

/// Header carrying the API credential.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Response fragments of one streaming call, in arrival order.
pub type ChunkStream = BoxStream<'static, Result<GenerateContentResponse, GenerationError>>;

/// Sends one request and returns the service's answer.
pub trait Transport: Send + Sync {
    /// Single round trip.
    fn send(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<GenerateContentResponse, GenerationError>> + Send;

    /// Open a streaming round trip. Errors that occur once the stream is
    /// open are yielded by the stream itself.
    fn send_streaming(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<ChunkStream, GenerationError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<GenerateContentResponse, GenerationError>> + Send {
        (**self).send(request)
    }

    fn send_streaming(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<ChunkStream, GenerationError>> + Send {
        (**self).send_streaming(request)
    }
}

/// REST transport backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Build a transport from the service configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("quill/0.1")
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.endpoint().to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{model}:{method}", self.base_url)
    }

    async fn post(
        &self,
        url: &str,
        request: GenerationRequest,
    ) -> Result<reqwest::Response, GenerationError> {
        let body = RestRequest::from(request);
        let resp = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        check_response(resp).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let url = self.url(&request.model, "generateContent");
        let resp = self.post(&url, request).await?;
        let text = resp.text().await?;
        check_payload(decode_fragment(&text)?)
    }

    async fn send_streaming(
        &self,
        request: GenerationRequest,
    ) -> Result<ChunkStream, GenerationError> {
        let url = self.url(&request.model, "streamGenerateContent?alt=sse");
        let resp = self.post(&url, request).await?;
        let events = decode_events(Box::pin(resp.bytes_stream()));
        Ok(events
            .map(|event| event.and_then(|data| check_payload(decode_fragment(&data)?)))
            .boxed())
    }
}

fn decode_fragment(data: &str) -> Result<GenerateContentResponse, GenerationError> {
    serde_json::from_str(data).map_err(|e| GenerationError::Decode(e.to_string()))
}
