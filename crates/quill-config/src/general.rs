//! General application configuration.

use quill_core::enums::CitationStyle;
use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".quill/data".to_string()
}

/// How many items each dashboard panel shows.
const fn default_recent_limit() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding one JSON document per persisted key.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Citation style used until one has been stored.
    #[serde(default)]
    pub citation_style: CitationStyle,

    /// Items per dashboard panel.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            citation_style: CitationStyle::default(),
            recent_limit: default_recent_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.data_dir, ".quill/data");
        assert_eq!(config.citation_style, CitationStyle::Apa);
        assert_eq!(config.recent_limit, 3);
    }
}
