use quill_core::citation::format_reference_named;
use quill_core::entities::ReferenceDraft;
use quill_core::enums::AbntType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ReferenceArgs, ReferenceCommands};
use crate::commands::shared::parse::{parse_enum, parse_style};
use crate::context::AppContext;
use crate::output::{output, output_text};

/// Handle `quill reference`.
pub async fn handle(
    action: &ReferenceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ws = &mut ctx.workspace;
    match action {
        ReferenceCommands::Add(args) => {
            let reference = ws.add_reference(draft_from_args(args)?)?;
            output(&reference, flags.format)
        }
        ReferenceCommands::Delete { id } => {
            ws.delete_reference(id)?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ReferenceCommands::List => output(&ws.references(), flags.format),
        ReferenceCommands::Get { id } => output(ws.reference(id)?, flags.format),
        ReferenceCommands::Cite { id, style } => {
            // Unknown style names format to the "unsupported" sentinel.
            let citation = match style.as_deref() {
                Some(name) => format_reference_named(ws.reference(id)?, name),
                None => ws.citation(id, None)?,
            };
            output_text("citation", &citation, flags.format)
        }
        ReferenceCommands::Bibliography { style } => {
            let bibliography = ws.bibliography(parse_style(style.as_deref())?);
            output_text("bibliography", &bibliography, flags.format)
        }
    }
}

fn draft_from_args(args: &ReferenceArgs) -> anyhow::Result<ReferenceDraft> {
    let abnt_type = args
        .abnt_type
        .as_deref()
        .map(|raw| parse_enum::<AbntType>(raw, "abnt type"))
        .transpose()?;

    Ok(ReferenceDraft {
        authors: args.authors.clone(),
        year: args.year.clone(),
        title: args.title.clone(),
        source: args.source.clone(),
        doi: args.doi.clone(),
        abnt_type,
        edition: args.edition.clone(),
        local: args.local.clone(),
        publisher: args.publisher.clone(),
        pages: args.pages.clone(),
        journal_volume: args.journal_volume.clone(),
        journal_issue: args.journal_issue.clone(),
        journal_pages: args.journal_pages.clone(),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use quill_core::enums::AbntType;

    use super::draft_from_args;
    use crate::cli::subcommands::{ReferenceArgs, ReferenceCommands};
    use crate::cli::{Cli, Commands};

    fn parse_add(extra: &[&str]) -> ReferenceArgs {
        let mut argv = vec![
            "quill", "reference", "add", "--authors", "Silva, J.", "--year", "2020", "--title",
            "T", "--source", "S",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).expect("cli should parse");
        let Commands::Reference {
            action: ReferenceCommands::Add(args),
        } = cli.command
        else {
            panic!("expected reference add");
        };
        args
    }

    #[test]
    fn abnt_fields_map_onto_draft() {
        let args = parse_add(&["--abnt-type", "book", "--edition", "2", "--local", "São Paulo"]);
        let draft = draft_from_args(&args).unwrap();
        assert_eq!(draft.abnt_type, Some(AbntType::Book));
        assert_eq!(draft.edition.as_deref(), Some("2"));
        assert_eq!(draft.local.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn unknown_abnt_type_is_rejected() {
        let args = parse_add(&["--abnt-type", "magazine"]);
        assert!(draft_from_args(&args).is_err());
    }
}
