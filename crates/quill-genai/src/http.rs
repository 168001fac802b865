//! Shared HTTP response helpers for the service transport.
//!
//! Non-success statuses become [`GenerationError::Api`] carrying the
//! service's error message when the body is the usual `{"error": {..}}`
//! envelope, or the raw body otherwise.

use crate::error::GenerationError;
use crate::wire::GenerateContentResponse;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GenerationError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(GenerationError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Pull `error.message` out of an error body, falling back to the body itself.
fn error_message(body: &str) -> String {
    serde_json::from_str::<GenerateContentResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .map(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

/// Turn an in-band error payload into an error.
pub fn check_payload(response: GenerateContentResponse) -> Result<GenerateContentResponse, GenerationError> {
    match response.error {
        Some(error) => Err(GenerationError::Api {
            status: error.code,
            message: error.message,
        }),
        None => Ok(response),
    }
}
