use quill_core::entities::{GoalDraft, ProjectGoal};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GoalCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `quill goal`.
pub async fn handle(
    action: &GoalCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ws = &mut ctx.workspace;
    match action {
        GoalCommands::Add { description } => {
            let goal = ws.add_goal(GoalDraft {
                description: description.clone(),
            })?;
            output(&goal, flags.format)
        }
        GoalCommands::Edit { id, description } => {
            let goal = ws.edit_goal(
                id,
                GoalDraft {
                    description: description.clone(),
                },
            )?;
            output(&goal, flags.format)
        }
        GoalCommands::Toggle { id } => {
            let goal = ws.toggle_goal(id)?;
            output(&goal, flags.format)
        }
        GoalCommands::Delete { id } => {
            ws.delete_goal(id)?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        GoalCommands::List { active } => {
            let goals: Vec<&ProjectGoal> = ws
                .goals()
                .iter()
                .filter(|goal| !active || !goal.is_achieved)
                .collect();
            output(&goals, flags.format)
        }
    }
}
