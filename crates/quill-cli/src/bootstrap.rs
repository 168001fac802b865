use quill_config::{ConfigError, QuillConfig};

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
///
/// The credential is checked here so that nothing else runs without one.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QuillConfig> {
    let mut config = QuillConfig::load_with_dotenv()?;
    if let Some(data_dir) = &flags.data_dir {
        config.general.data_dir.clone_from(data_dir);
    }

    if let Err(error) = config.require_credentials() {
        return Err(anyhow::anyhow!(configuration_block(&error)));
    }
    Ok(config)
}

/// Multi-line explanation shown when the service credential is unusable.
pub fn configuration_block(error: &ConfigError) -> String {
    [
        "Configuration error".to_string(),
        String::new(),
        format!("  {error}"),
        String::new(),
        "  Quill needs a Gemini API key before it can run. Set one of:".to_string(),
        "    GEMINI_API_KEY=<key>".to_string(),
        "    QUILL_GEMINI__API_KEY=<key>".to_string(),
        "  or add `api_key` under [gemini] in .quill/config.toml.".to_string(),
    ]
    .join("\n")
}
