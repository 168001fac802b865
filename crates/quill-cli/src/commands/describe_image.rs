use std::path::Path;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DescribeImageArgs;
use crate::context::AppContext;
use crate::output::output_generated;

/// Handle `quill describe-image`.
pub async fn handle(
    args: &DescribeImageArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = Path::new(&args.path);
    let mime_type = mime_type_for(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;
    tracing::debug!(path = %path.display(), mime_type, size = bytes.len(), "image loaded");

    let encoded = STANDARD.encode(&bytes);
    let state = ctx
        .workspace
        .describe_image(&args.prompt, &encoded, mime_type)
        .await?;
    output_generated(state, flags.format)
}

/// Image types the service accepts inline, keyed by file extension.
fn mime_type_for(path: &Path) -> anyhow::Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        "gif" => Ok("image/gif"),
        "heic" => Ok("image/heic"),
        "heif" => Ok("image/heif"),
        _ => anyhow::bail!(
            "unsupported image type for {} (expected png, jpeg, webp, gif, heic or heif)",
            path.display()
        ),
    }
}
