use clap::Subcommand;

/// Writing helper commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WriteCommands {
    /// Outline a paper section from a template.
    Template {
        /// Template ID (see `quill write templates`)
        id: String,
        #[arg(long)]
        stream: bool,
    },
    /// Review a passage for clarity and academic tone.
    Review {
        text: String,
        #[arg(long)]
        stream: bool,
    },
    /// Suggest connective phrases for a writing context.
    Phrases {
        /// Context ID (see `quill write contexts`)
        id: String,
        #[arg(long)]
        stream: bool,
    },
    /// List section template IDs.
    Templates,
    /// List phrase context IDs.
    Contexts,
}
