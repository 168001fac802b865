use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::{finish_stream, output, output_generated, print_chunk};

/// Handle `quill ask`.
pub async fn handle(args: &AskArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ws = &mut ctx.workspace;
    let system = args.system.as_deref();

    if args.json {
        let value = ws.ask_json(&args.prompt, system).await?;
        return output(&value, flags.format);
    }
    if args.stream {
        let state = ws.ask_streaming(&args.prompt, system, print_chunk).await?;
        return finish_stream(state);
    }
    let state = ws.ask(&args.prompt, system).await?;
    output_generated(state, flags.format)
}
