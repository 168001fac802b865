use clap::{Args, Subcommand};

/// Reference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReferenceCommands {
    /// Add a reference.
    Add(ReferenceArgs),
    /// Delete a reference.
    Delete { id: String },
    /// List references.
    List,
    /// Get a reference by ID.
    Get { id: String },
    /// Format one reference.
    Cite {
        id: String,
        #[arg(long)]
        style: Option<String>,
    },
    /// Format every reference, one per line.
    Bibliography {
        #[arg(long)]
        style: Option<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ReferenceArgs {
    #[arg(long)]
    pub authors: String,
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub title: String,
    /// Journal, publisher or site
    #[arg(long)]
    pub source: String,
    #[arg(long)]
    pub doi: Option<String>,
    /// ABNT document type: book, article, thesis, online
    #[arg(long)]
    pub abnt_type: Option<String>,
    #[arg(long)]
    pub edition: Option<String>,
    /// Place of publication
    #[arg(long)]
    pub local: Option<String>,
    #[arg(long)]
    pub publisher: Option<String>,
    #[arg(long)]
    pub pages: Option<String>,
    #[arg(long)]
    pub journal_volume: Option<String>,
    #[arg(long)]
    pub journal_issue: Option<String>,
    #[arg(long)]
    pub journal_pages: Option<String>,
}
