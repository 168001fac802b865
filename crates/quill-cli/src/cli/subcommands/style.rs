use clap::Subcommand;

/// Citation style commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StyleCommands {
    /// Show the stored style.
    Get,
    /// Store a new style: APA or ABNT.
    Set { style: String },
    /// List supported styles.
    List,
}
