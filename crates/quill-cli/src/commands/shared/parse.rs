use anyhow::Context;
use chrono::NaiveDate;
use quill_core::enums::CitationStyle;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid {field} '{raw}' (expected YYYY-MM-DD)"))
}

/// Parse an optional `--style` flag.
pub fn parse_style(raw: Option<&str>) -> anyhow::Result<Option<CitationStyle>> {
    raw.map(str::parse::<CitationStyle>)
        .transpose()
        .map_err(anyhow::Error::from)
}

/// Treat an empty flag value as "clear the field".
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use quill_core::enums::{AbntType, CitationStyle};

    use super::{optional_text, parse_date, parse_enum, parse_style};

    #[test]
    fn parses_snake_case_enum() {
        let kind: AbntType = parse_enum("thesis", "abnt type").expect("type should parse");
        assert_eq!(kind, AbntType::Thesis);
    }

    #[test]
    fn enum_parsing_ignores_case() {
        let kind: AbntType = parse_enum("Online", "abnt type").expect("type should parse");
        assert_eq!(kind, AbntType::Online);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<AbntType>("magazine", "abnt type").expect_err("should fail");
        assert!(err.to_string().contains("invalid abnt type 'magazine'"));
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2024-03-09", "due date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
        assert!(parse_date("09/03/2024", "due date").is_err());
    }

    #[test]
    fn style_flag_is_optional() {
        assert_eq!(parse_style(None).unwrap(), None);
        assert_eq!(parse_style(Some("abnt")).unwrap(), Some(CitationStyle::Abnt));
        assert!(parse_style(Some("mla")).is_err());
    }

    #[test]
    fn blank_text_clears() {
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some("x".to_string())).as_deref(), Some("x"));
    }
}
