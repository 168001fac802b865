use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Article { action } => commands::article::handle(&action, ctx, flags).await,
        Commands::Reference { action } => commands::reference::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Goal { action } => commands::goal::handle(&action, ctx, flags).await,
        Commands::Style { action } => commands::style::handle(&action, ctx, flags).await,
        Commands::Write { action } => commands::write::handle(&action, ctx, flags).await,
        Commands::Guide(args) => commands::guide::handle(&args, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
        Commands::DescribeImage(args) => commands::describe_image::handle(&args, ctx, flags).await,
    }
}
