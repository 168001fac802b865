use std::io::{IsTerminal, Write};

use quill_core::request::RequestState;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print plain text, or wrap it as `{"<key>": text}` for the JSON formats.
pub fn output_text(key: &str, text: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{text}");
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => {
            output(&serde_json::json!({ key: text }), format)
        }
    }
}

/// Print the outcome of a generation request.
///
/// A failed request becomes an error carrying the site's message, so the
/// process exits non-zero.
pub fn output_generated(state: &RequestState<String>, format: OutputFormat) -> anyhow::Result<()> {
    match state {
        RequestState::Failed(message) => anyhow::bail!("{message}"),
        RequestState::Succeeded(text) if format == OutputFormat::Table => {
            println!("{text}");
            Ok(())
        }
        other => output(other, format),
    }
}

/// Sink for streamed fragments: each one is written and flushed immediately.
pub fn print_chunk(chunk: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(error) = write!(stdout, "{chunk}").and_then(|()| stdout.flush()) {
        tracing::warn!(%error, "failed to write streamed fragment");
    }
}

/// Close a streamed response: newline after the text, error on failure.
pub fn finish_stream(state: &RequestState<String>) -> anyhow::Result<()> {
    println!();
    match state {
        RequestState::Failed(message) => anyhow::bail!("{message}"),
        _ => Ok(()),
    }
}

fn table_options() -> table::TableOptions {
    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    let max_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .or(is_tty.then_some(120));
    table::TableOptions {
        max_width,
        color: is_tty && std::env::var_os("NO_COLOR").is_none(),
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort();
    if let Some(pos) = headers.iter().position(|header| header == "id") {
        let id = headers.remove(pos);
        headers.insert(0, id);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.len().to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
