//! Citation string templates.
//!
//! Simplified per-style templates, not a full implementation of either
//! standard:
//!
//! ```text
//! APA:  {authors} ({year}). {title}. {source}. doi:{doi}
//! ABNT: {AUTHORS}. {title}. {source}, {year}. Disponível em: doi:{doi}
//! ```
//!
//! The DOI segment is omitted when the reference has none. No locale handling
//! and no escaping.

use crate::entities::Reference;
use crate::enums::CitationStyle;

/// Returned for style names outside the supported set.
pub const UNSUPPORTED_STYLE: &str = "Estilo de formatação não suportado.";

/// Format one reference in the given style.
#[must_use]
pub fn format_reference(reference: &Reference, style: CitationStyle) -> String {
    let formatted = match style {
        CitationStyle::Apa => {
            let doi = reference
                .doi
                .as_deref()
                .map(|doi| format!("doi:{doi}"))
                .unwrap_or_default();
            format!(
                "{} ({}). {}. {}. {doi}",
                reference.authors, reference.year, reference.title, reference.source
            )
        }
        CitationStyle::Abnt => {
            let doi = reference
                .doi
                .as_deref()
                .map(|doi| format!("Disponível em: doi:{doi}"))
                .unwrap_or_default();
            format!(
                "{}. {}. {}, {}. {doi}",
                reference.authors.to_uppercase(),
                reference.title,
                reference.source,
                reference.year
            )
        }
    };
    formatted.trim_end().to_string()
}

/// Format a reference using a style given by name (e.g. read from storage).
///
/// Unknown names yield [`UNSUPPORTED_STYLE`] instead of failing.
#[must_use]
pub fn format_reference_named(reference: &Reference, style: &str) -> String {
    style
        .parse::<CitationStyle>()
        .map_or_else(|_| UNSUPPORTED_STYLE.to_string(), |style| format_reference(reference, style))
}

/// Format every reference, one per line, in collection order.
#[must_use]
pub fn format_bibliography(references: &[Reference], style: CitationStyle) -> String {
    references
        .iter()
        .map(|reference| format_reference(reference, style))
        .collect::<Vec<_>>()
        .join("\n")
}
