//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use quill_config::{DEFAULT_BASE_URL, QuillConfig};
use quill_core::enums::CitationStyle;

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
model = "gemini-2.5-pro"
timeout_secs = 15
"#,
        )?;

        let config: QuillConfig = Figment::from(Serialized::defaults(QuillConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout_secs, 15);
        assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
        assert!(config.require_credentials().is_ok());
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
data_dir = "/var/lib/quill"
citation_style = "ABNT"
recent_limit = 5
"#,
        )?;

        let config: QuillConfig = Figment::from(Serialized::defaults(QuillConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.data_dir, "/var/lib/quill");
        assert_eq!(config.general.citation_style, CitationStyle::Abnt);
        assert_eq!(config.general.recent_limit, 5);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".quill")?;
        jail.create_file(
            ".quill/config.toml",
            r#"
[gemini]
api_key = "project-key"
"#,
        )?;

        let config: QuillConfig = QuillConfig::figment().extract()?;
        assert_eq!(config.gemini.api_key, "project-key");
        Ok(())
    });
}

#[test]
fn rejects_unknown_citation_style() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ncitation_style = \"MLA\"\n")?;

        let result: Result<QuillConfig, _> =
            Figment::from(Serialized::defaults(QuillConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
