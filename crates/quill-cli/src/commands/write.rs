use quill_genai::PromptTask;
use quill_genai::prompts::{PHRASE_CONTEXTS, TEMPLATE_TYPES};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WriteCommands;
use crate::context::AppContext;
use crate::output::{finish_stream, output, output_generated, print_chunk};

#[derive(Debug, Serialize)]
struct Choice {
    id: &'static str,
    label: &'static str,
}

fn choices(table: &[(&'static str, &'static str)]) -> Vec<Choice> {
    table
        .iter()
        .map(|&(id, label)| Choice { id, label })
        .collect()
}

/// Commands that only list built-in tables. Returns `None` for the rest.
pub fn handle_offline(action: &WriteCommands, flags: &GlobalFlags) -> Option<anyhow::Result<()>> {
    match action {
        WriteCommands::Templates => Some(output(&choices(&TEMPLATE_TYPES), flags.format)),
        WriteCommands::Contexts => Some(output(&choices(&PHRASE_CONTEXTS), flags.format)),
        _ => None,
    }
}

/// Handle `quill write`.
pub async fn handle(
    action: &WriteCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (task, stream) = match action {
        WriteCommands::Template { id, stream } => (PromptTask::SectionTemplate(id), *stream),
        WriteCommands::Review { text, stream } => (PromptTask::ReviewText(text), *stream),
        WriteCommands::Phrases { id, stream } => (PromptTask::SuggestPhrases(id), *stream),
        WriteCommands::Templates | WriteCommands::Contexts => {
            return handle_offline(action, flags).unwrap_or(Ok(()));
        }
    };
    run_task(task, stream, ctx, flags).await
}

/// Run one writing task, streamed or as a single round trip.
pub async fn run_task(
    task: PromptTask<'_>,
    stream: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if stream {
        let state = ctx.workspace.write_streaming(task, print_chunk).await?;
        finish_stream(state)
    } else {
        let state = ctx.workspace.write(task).await?;
        output_generated(state, flags.format)
    }
}
