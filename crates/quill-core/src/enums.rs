//! Citation styles and reference sub-types.
//!
//! `CitationStyle` is a closed enumeration persisted as `"APA"` / `"ABNT"`,
//! matching the stored `citationStyle` value. Reference sub-types use
//! `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CitationStyle
// ---------------------------------------------------------------------------

/// Bibliographic citation style.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum CitationStyle {
    /// American Psychological Association.
    #[default]
    #[serde(rename = "APA")]
    Apa,
    /// Associação Brasileira de Normas Técnicas.
    #[serde(rename = "ABNT")]
    Abnt,
}

impl CitationStyle {
    pub const ALL: [Self; 2] = [Self::Apa, Self::Abnt];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apa => "APA",
            Self::Abnt => "ABNT",
        }
    }

    /// Long descriptive name shown next to the style selector.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Apa => "APA (American Psychological Association)",
            Self::Abnt => "ABNT (Associação Brasileira de Normas Técnicas)",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "APA" => Ok(Self::Apa),
            "ABNT" => Ok(Self::Abnt),
            other => Err(CoreError::Validation(format!(
                "unsupported citation style '{other}' (expected APA or ABNT)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// AbntType
// ---------------------------------------------------------------------------

/// Document type used by ABNT-specific reference fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AbntType {
    Book,
    Article,
    Thesis,
    Online,
}

impl AbntType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Article => "article",
            Self::Thesis => "thesis",
            Self::Online => "online",
        }
    }
}

impl fmt::Display for AbntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_style_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&CitationStyle::Apa).unwrap(), "\"APA\"");
        assert_eq!(serde_json::to_string(&CitationStyle::Abnt).unwrap(), "\"ABNT\"");
    }

    #[test]
    fn citation_style_parses_any_case() {
        assert_eq!("abnt".parse::<CitationStyle>().unwrap(), CitationStyle::Abnt);
        assert_eq!(" Apa ".parse::<CitationStyle>().unwrap(), CitationStyle::Apa);
        assert!("MLA".parse::<CitationStyle>().is_err());
    }

    #[test]
    fn default_style_is_apa() {
        assert_eq!(CitationStyle::default(), CitationStyle::Apa);
    }

    #[test]
    fn abnt_type_is_snake_case() {
        let parsed: AbntType = serde_json::from_str("\"thesis\"").unwrap();
        assert_eq!(parsed, AbntType::Thesis);
        assert_eq!(parsed.to_string(), "thesis");
    }
}
