//! # quill-config
//!
//! Layered configuration loading for Quill using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUILL_*` prefix, `__` as separator)
//! 2. The bare credential variables `GEMINI_API_KEY` and `API_KEY`
//! 3. Project-level `.quill/config.toml`
//! 4. User-level `~/.config/quill/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUILL_GEMINI__API_KEY` -> `gemini.api_key`,
//! `QUILL_GENERAL__DATA_DIR` -> `general.data_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use quill_config::QuillConfig;
//!
//! let config = QuillConfig::load_with_dotenv().expect("config");
//! let gemini = config.require_credentials().expect("API key");
//! println!("model: {}", gemini.model);
//! ```

mod error;
mod gemini;
mod general;

pub use error::ConfigError;
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Credential variables accepted without the `QUILL_` prefix, lowest priority first.
const BARE_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuillConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".quill/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Bare credential variables
        for var in BARE_KEY_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(|_| "gemini.api_key".into()));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("QUILL_").split("__"))
    }

    /// Return the service section, failing when the credential is missing.
    ///
    /// A missing credential is fatal for the whole application; callers run
    /// this during startup before anything else.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] or [`ConfigError::InvalidValue`].
    pub fn require_credentials(&self) -> Result<&GeminiConfig, ConfigError> {
        self.gemini.validate()?;
        Ok(&self.gemini)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quill").join("config.toml"))
    }
}
