//! Markdown fence stripping and structured-response parsing.
//!
//! JSON-mode responses often arrive wrapped in a code fence:
//!
//! ````text
//! ```json
//! {"phrases": ["..."]}
//! ```
//! ````
//!
//! The whole (trimmed) text must be one fence for it to be unwrapped; text
//! with a fence somewhere in the middle is left alone.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::StructuredError;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// Remove a surrounding code fence, returning the trimmed inner text.
///
/// Text without a fence, or with an empty fence body, is returned trimmed.
#[must_use]
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    FENCE
        .captures(trimmed)
        .and_then(|captures| captures.get(2))
        .map(|body| body.as_str().trim())
        .filter(|body| !body.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

/// Strip an optional fence and parse the rest as JSON.
///
/// # Errors
///
/// Returns [`StructuredError::MalformedResponse`] carrying the text exactly as
/// received when it is not valid JSON for `D`.
pub fn parse_structured<D: DeserializeOwned>(raw: &str) -> Result<D, StructuredError> {
    serde_json::from_str(&strip_code_fence(raw)).map_err(|source| {
        StructuredError::MalformedResponse {
            raw: raw.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Deserialize)]
    struct Sample {
        a: i64,
    }

    #[rstest]
    #[case("```json\n{\"a\":1}\n```", "{\"a\":1}")]
    #[case("```\n{\"a\":1}\n```", "{\"a\":1}")]
    #[case("  ```json\n  {\"a\":1}  \n```  \n", "{\"a\":1}")]
    #[case("{\"a\":1}", "{\"a\":1}")]
    #[case("  plain text \n", "plain text")]
    #[case("```\n```", "```\n```")]
    #[case("see ```json\n{}\n``` here", "see ```json\n{}\n``` here")]
    fn strips_only_surrounding_fences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_code_fence(input), expected);
    }

    #[test]
    fn fenced_json_parses() {
        let parsed: Sample = parse_structured("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(parsed, Sample { a: 1 });
    }

    #[test]
    fn bare_json_parses() {
        let parsed: Sample = parse_structured("{\"a\":1}").unwrap();
        assert_eq!(parsed, Sample { a: 1 });
    }

    #[test]
    fn malformed_keeps_raw_text() {
        let err = parse_structured::<Sample>("not json").unwrap_err();
        assert!(matches!(err, StructuredError::MalformedResponse { .. }));
        assert_eq!(err.raw_response(), Some("not json"));
    }
}
