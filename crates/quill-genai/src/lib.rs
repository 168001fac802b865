//! # quill-genai
//!
//! Prompt construction and the generative-text service client for Quill.
//!
//! - [`prompts`] builds the prompt and system instruction for each task
//! - [`GenerationClient`] issues plain, structured (JSON-mode), multimodal
//!   and streaming calls over a [`Transport`]
//! - [`HttpTransport`] speaks the service's REST API, decoding streamed
//!   responses as server-sent events
//!
//! Every call is a single round trip: no retry, no caching, no backoff.

pub mod fence;
pub mod prompts;
pub mod sse;
pub mod wire;

mod client;
mod error;
mod http;
mod transport;

pub use client::GenerationClient;
pub use error::{GenerationError, StructuredError};
pub use fence::{parse_structured, strip_code_fence};
pub use prompts::{Prompt, PromptTask};
pub use transport::{ChunkStream, HttpTransport, Transport};
pub use wire::{GenerateContentResponse, GenerationRequest};
