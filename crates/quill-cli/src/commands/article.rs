use quill_core::entities::{Article, ArticleDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArticleCommands;
use crate::commands::shared::parse::optional_text;
use crate::context::AppContext;
use crate::output::{output, output_generated};

/// Handle `quill article`.
pub async fn handle(
    action: &ArticleCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ws = &mut ctx.workspace;
    match action {
        ArticleCommands::Add {
            title,
            authors,
            abstract_text,
            url,
            notes,
        } => {
            let article = ws.add_article(ArticleDraft {
                title: title.clone(),
                authors: authors.clone().unwrap_or_default(),
                abstract_text: abstract_text.clone().unwrap_or_default(),
                url: url.clone(),
                notes: notes.clone(),
            })?;
            output(&article, flags.format)
        }
        ArticleCommands::Edit {
            id,
            title,
            authors,
            abstract_text,
            url,
            notes,
        } => {
            let patch = Patch {
                title: title.clone(),
                authors: authors.clone(),
                abstract_text: abstract_text.clone(),
                url: url.clone(),
                notes: notes.clone(),
            };
            if patch.is_empty() {
                anyhow::bail!(
                    "At least one of --title, --authors, --abstract, --url, or --notes must be provided"
                );
            }
            let draft = patch.apply(ws.article(id)?);
            let article = ws.edit_article(id, draft)?;
            output(&article, flags.format)
        }
        ArticleCommands::Delete { id } => {
            ws.delete_article(id)?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ArticleCommands::List { search } => {
            let articles: Vec<&Article> = ws
                .articles()
                .iter()
                .filter(|article| search.as_deref().is_none_or(|q| matches(article, q)))
                .collect();
            output(&articles, flags.format)
        }
        ArticleCommands::Get { id } => output(ws.article(id)?, flags.format),
        ArticleCommands::Summarize { id } => {
            let state = ws.summarize_article(id).await?;
            output_generated(state, flags.format)
        }
    }
}

/// Fields given on `article edit`; `None` keeps the stored value and an
/// empty string clears an optional field.
#[derive(Debug, Default)]
struct Patch {
    title: Option<String>,
    authors: Option<String>,
    abstract_text: Option<String>,
    url: Option<String>,
    notes: Option<String>,
}

impl Patch {
    const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.authors.is_none()
            && self.abstract_text.is_none()
            && self.url.is_none()
            && self.notes.is_none()
    }

    fn apply(self, article: &Article) -> ArticleDraft {
        let current = article.to_draft();
        ArticleDraft {
            title: self.title.unwrap_or(current.title),
            authors: self.authors.unwrap_or(current.authors),
            abstract_text: self.abstract_text.unwrap_or(current.abstract_text),
            url: self.url.map_or(current.url, |url| optional_text(Some(url))),
            notes: self.notes.map_or(current.notes, |notes| optional_text(Some(notes))),
        }
    }
}

fn matches(article: &Article, query: &str) -> bool {
    let query = query.to_lowercase();
    article.title.to_lowercase().contains(&query) || article.authors.to_lowercase().contains(&query)
}
