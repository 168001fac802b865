use anyhow::Context;
use quill_config::QuillConfig;
use quill_genai::HttpTransport;
use quill_store::{FileStore, Workspace};

/// Everything a command handler needs.
pub struct AppContext {
    pub config: QuillConfig,
    pub workspace: Workspace<HttpTransport, FileStore>,
}

impl AppContext {
    pub fn init(config: QuillConfig) -> anyhow::Result<Self> {
        let workspace = Workspace::open(&config).with_context(|| {
            format!(
                "failed to open quill workspace at {}",
                config.general.data_dir
            )
        })?;
        Ok(Self { config, workspace })
    }
}
