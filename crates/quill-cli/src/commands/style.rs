use quill_core::enums::CitationStyle;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StyleCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StyleView {
    style: CitationStyle,
    name: &'static str,
}

impl From<CitationStyle> for StyleView {
    fn from(style: CitationStyle) -> Self {
        Self {
            style,
            name: style.long_name(),
        }
    }
}

/// Handle `quill style`.
pub async fn handle(
    action: &StyleCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ws = &mut ctx.workspace;
    match action {
        StyleCommands::Get => output(&StyleView::from(ws.citation_style()), flags.format),
        StyleCommands::Set { style } => {
            let style = style.parse::<CitationStyle>()?;
            ws.set_citation_style(style)?;
            tracing::debug!(%style, "citation style stored");
            output(&StyleView::from(style), flags.format)
        }
        StyleCommands::List => {
            let styles: Vec<StyleView> = CitationStyle::ALL.into_iter().map(StyleView::from).collect();
            output(&styles, flags.format)
        }
    }
}
