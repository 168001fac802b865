use quill_core::entities::{Task, TaskDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::parse::{optional_text, parse_date};
use crate::context::AppContext;
use crate::output::output;

/// Handle `quill task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ws = &mut ctx.workspace;
    match action {
        TaskCommands::Add {
            description,
            due,
            project,
        } => {
            let task = ws.add_task(TaskDraft {
                description: description.clone(),
                due_date: due.as_deref().map(|raw| parse_date(raw, "due date")).transpose()?,
                project_id: optional_text(project.clone()),
            })?;
            output(&task, flags.format)
        }
        TaskCommands::Edit {
            id,
            description,
            due,
            clear_due,
            project,
        } => {
            if description.is_none() && due.is_none() && !clear_due && project.is_none() {
                anyhow::bail!(
                    "At least one of --description, --due, --clear-due, or --project must be provided"
                );
            }
            let mut draft = find(ws.tasks(), id)?.to_draft();
            if let Some(description) = description {
                draft.description.clone_from(description);
            }
            if let Some(raw) = due {
                draft.due_date = Some(parse_date(raw, "due date")?);
            }
            if *clear_due {
                draft.due_date = None;
            }
            if let Some(project) = project {
                draft.project_id = optional_text(Some(project.clone()));
            }
            let task = ws.edit_task(id, draft)?;
            output(&task, flags.format)
        }
        TaskCommands::Toggle { id } => {
            let task = ws.toggle_task(id)?;
            output(&task, flags.format)
        }
        TaskCommands::Delete { id } => {
            ws.delete_task(id)?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        TaskCommands::List { pending } => {
            let tasks: Vec<&Task> = ws
                .tasks()
                .iter()
                .filter(|task| !pending || !task.is_completed)
                .collect();
            output(&tasks, flags.format)
        }
    }
}

fn find<'a>(tasks: &'a [Task], id: &str) -> anyhow::Result<&'a Task> {
    tasks
        .iter()
        .find(|task| task.id == id)
        .ok_or_else(|| anyhow::anyhow!("task not found: {id}"))
}
