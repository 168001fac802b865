//! Request and response shapes for the generative-text service.
//!
//! Callers build a [`GenerationRequest`] (`model`, `contents`, optional
//! `config`). The HTTP transport maps it onto the REST body:
//!
//! ```text
//! { contents: [{ role: "user", parts }],
//!   systemInstruction?: { parts: [{ text }] },
//!   generationConfig?: { responseMimeType } }
//! ```
//!
//! Responses are narrowed to the text they carry; nothing else in the
//! service's native response is consumed.

use serde::{Deserialize, Serialize};

/// MIME type requested for structured (JSON-mode) output.
pub const JSON_MIME_TYPE: &str = "application/json";

// ── Request ────────────────────────────────────────────────────────

/// One outbound generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub contents: Contents,
    pub config: Option<GenerationConfig>,
}

/// Prompt payload: plain text or an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    Text(String),
    Parts(Vec<Part>),
}

impl Contents {
    fn into_parts(self) -> Vec<Part> {
        match self {
            Self::Text(text) => vec![Part::Text(text)],
            Self::Parts(parts) => parts,
        }
    }
}

/// A single content part, serialized as `{"text": ..}` or `{"inlineData": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(InlineData),
}

/// Inline binary content, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationConfig {
    pub system_instruction: Option<String>,
    pub response_mime_type: Option<String>,
}

impl GenerationConfig {
    /// `None` when neither field is set, so no config block is sent.
    #[must_use]
    pub fn non_empty(self) -> Option<Self> {
        (self.system_instruction.is_some() || self.response_mime_type.is_some()).then_some(self)
    }
}

impl GenerationRequest {
    /// Text prompt with an optional system instruction.
    #[must_use]
    pub fn text(model: &str, prompt: &str, system_instruction: Option<&str>) -> Self {
        Self {
            model: model.to_string(),
            contents: Contents::Text(prompt.to_string()),
            config: GenerationConfig {
                system_instruction: system_instruction.map(str::to_string),
                response_mime_type: None,
            }
            .non_empty(),
        }
    }

    /// Ask for `application/json` output.
    #[must_use]
    pub fn json_mode(mut self) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.response_mime_type = Some(JSON_MIME_TYPE.to_string());
        self.config = Some(config);
        self
    }

    /// One text part followed by one inline binary part.
    #[must_use]
    pub fn with_image(model: &str, prompt: &str, image_base64: &str, mime_type: &str) -> Self {
        Self {
            model: model.to_string(),
            contents: Contents::Parts(vec![
                Part::Text(prompt.to_string()),
                Part::InlineData(InlineData {
                    mime_type: mime_type.to_string(),
                    data: image_base64.to_string(),
                }),
            ]),
            config: None,
        }
    }

    /// Length of all text parts, for logging.
    #[must_use]
    pub fn prompt_len(&self) -> usize {
        match &self.contents {
            Contents::Text(text) => text.len(),
            Contents::Parts(parts) => parts
                .iter()
                .map(|part| match part {
                    Part::Text(text) => text.len(),
                    Part::InlineData(_) => 0,
                })
                .sum(),
        }
    }
}

// ── REST body ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RestRequest {
    contents: Vec<RestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<RestGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RestContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RestGenerationConfig {
    response_mime_type: String,
}

impl From<GenerationRequest> for RestRequest {
    fn from(request: GenerationRequest) -> Self {
        let config = request.config.unwrap_or_default();
        Self {
            contents: vec![RestContent {
                role: Some("user"),
                parts: request.contents.into_parts(),
            }],
            system_instruction: config.system_instruction.map(|text| RestContent {
                role: None,
                parts: vec![Part::Text(text)],
            }),
            generation_config: config
                .response_mime_type
                .map(|response_mime_type| RestGenerationConfig { response_mime_type }),
        }
    }
}

// ── Response ───────────────────────────────────────────────────────

/// One response, or one fragment of a streamed response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the service reports an error inside a 200 stream.
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl GenerateContentResponse {
    /// Response carrying a single text part.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: Some(text.into()),
                    }],
                }),
            }],
            error: None,
        }
    }

    /// Concatenated text of the first candidate; empty when there is none.
    #[must_use]
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
