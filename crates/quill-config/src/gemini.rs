//! Generative-text service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// Public REST endpoint of the service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Transport-level request timeout. The client itself never times out.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API credential. Required: the application refuses to start without it.
    #[serde(default)]
    pub api_key: String,

    /// Model name (e.g., `gemini-2.5-flash`).
    #[serde(default = "default_model")]
    pub model: String,

    /// Service base URL, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP timeout applied by the transport, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if the credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Check the section is usable for outbound calls.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without a credential and
    /// [`ConfigError::InvalidValue`] for an empty model or base URL or a zero
    /// timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "gemini".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(invalid("gemini.model", "must not be empty"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(invalid("gemini.base_url", "must be an http(s) URL"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("gemini.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    pub fn endpoint(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GeminiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, 60);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { ref section }) if section == "gemini"
        ));
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = GeminiConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn configured_when_key_set() {
        let config = GeminiConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = GeminiConfig {
            api_key: "k".into(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "gemini.timeout_secs"
        ));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let config = GeminiConfig {
            base_url: "http://localhost:8080/".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:8080");
    }
}
