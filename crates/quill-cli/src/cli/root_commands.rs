use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ArticleCommands, GoalCommands, ReferenceCommands, StyleCommands, TaskCommands, WriteCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Articles under study.
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },
    /// Bibliographic references.
    Reference {
        #[command(subcommand)]
        action: ReferenceCommands,
    },
    /// Research tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Project goals.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Stored citation style.
    Style {
        #[command(subcommand)]
        action: StyleCommands,
    },
    /// Writing helpers.
    Write {
        #[command(subcommand)]
        action: WriteCommands,
    },
    /// Formatting guide for a citation style.
    Guide(GuideArgs),
    /// Overview of articles, tasks and goals.
    Dashboard,
    /// Send a free-form prompt.
    Ask(AskArgs),
    /// Ask about an image file.
    DescribeImage(DescribeImageArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GuideArgs {
    /// Style to explain (defaults to the stored style)
    #[arg(long)]
    pub style: Option<String>,
    /// Print the response as it arrives
    #[arg(long)]
    pub stream: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    pub prompt: String,
    /// System instruction sent with the prompt
    #[arg(long)]
    pub system: Option<String>,
    /// Print the response as it arrives
    #[arg(long, conflicts_with = "json")]
    pub stream: bool,
    /// Request and parse a JSON response
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DescribeImageArgs {
    /// PNG, JPEG, WEBP, GIF, HEIC or HEIF file
    pub path: String,
    #[arg(long)]
    pub prompt: String,
}
