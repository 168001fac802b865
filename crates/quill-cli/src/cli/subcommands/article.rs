use clap::Subcommand;

/// Article commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArticleCommands {
    /// Add an article.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        authors: Option<String>,
        #[arg(long = "abstract")]
        abstract_text: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit an article. Omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        authors: Option<String>,
        #[arg(long = "abstract")]
        abstract_text: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an article.
    Delete { id: String },
    /// List articles.
    List {
        /// Case-insensitive match on title or authors
        #[arg(long)]
        search: Option<String>,
    },
    /// Get an article by ID.
    Get { id: String },
    /// Generate and store a summary of the article.
    Summarize { id: String },
}
