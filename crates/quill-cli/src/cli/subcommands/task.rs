use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a task.
    Add {
        #[arg(long)]
        description: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        project: Option<String>,
    },
    /// Edit a task. Omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        #[arg(long)]
        project: Option<String>,
    },
    /// Flip a task between pending and completed.
    Toggle { id: String },
    /// Delete a task.
    Delete { id: String },
    /// List tasks in due-date order.
    List {
        /// Only tasks not yet completed
        #[arg(long)]
        pending: bool,
    },
}
