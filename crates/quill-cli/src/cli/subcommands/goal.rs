use clap::Subcommand;

/// Goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// Add a goal.
    Add {
        #[arg(long)]
        description: String,
    },
    /// Change a goal's description.
    Edit {
        id: String,
        #[arg(long)]
        description: String,
    },
    /// Flip a goal between active and achieved.
    Toggle { id: String },
    /// Delete a goal.
    Delete { id: String },
    /// List goals.
    List {
        /// Only goals not yet achieved
        #[arg(long)]
        active: bool,
    },
}
