use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `quill dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.workspace.dashboard(), flags.format)
}
