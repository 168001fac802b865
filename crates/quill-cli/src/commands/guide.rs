use quill_genai::PromptTask;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GuideArgs;
use crate::commands::shared::parse::parse_style;
use crate::commands::write::run_task;
use crate::context::AppContext;

/// Handle `quill guide`.
pub async fn handle(args: &GuideArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let style = parse_style(args.style.as_deref())?.unwrap_or_else(|| ctx.workspace.citation_style());
    run_task(PromptTask::FormattingGuide(style), args.stream, ctx, flags).await
}
