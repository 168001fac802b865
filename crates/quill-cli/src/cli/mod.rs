use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `quill` binary.
#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Quill - research and writing assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding persisted collections (overrides config)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{ArticleCommands, TaskCommands, WriteCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["quill", "--format", "table", "--verbose", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["quill", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["quill", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["quill", "--data-dir", "/tmp/quill", "dashboard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/quill"));
    }

    #[test]
    fn article_add_takes_named_fields() {
        let cli = Cli::try_parse_from([
            "quill",
            "article",
            "add",
            "--title",
            "Deep learning",
            "--abstract",
            "A survey",
        ])
        .expect("cli should parse");

        let Commands::Article {
            action: ArticleCommands::Add { title, abstract_text, .. },
        } = cli.command
        else {
            panic!("expected article add");
        };
        assert_eq!(title, "Deep learning");
        assert_eq!(abstract_text.as_deref(), Some("A survey"));
    }

    #[test]
    fn task_add_accepts_due_date() {
        let cli = Cli::try_parse_from([
            "quill", "task", "add", "--description", "draft", "--due", "2024-05-01",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Task { action: TaskCommands::Add { due: Some(_), .. } }
        ));
    }

    #[test]
    fn write_review_streams_on_request() {
        let cli = Cli::try_parse_from(["quill", "write", "review", "some text", "--stream"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Write { action: WriteCommands::Review { stream: true, .. } }
        ));
    }

    #[test]
    fn describe_image_requires_prompt() {
        let parsed = Cli::try_parse_from(["quill", "describe-image", "figure.png"]);
        assert!(parsed.is_err());
    }
}
