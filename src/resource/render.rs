//! Output rendering for resources: tables from registry columns, JSON, YAML

use super::registry::{ColumnDef, ResourceDef};
use anyhow::{Context, Result};
use serde_json::Value;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Extract a value from JSON using a dot-notation path
pub fn extract_json_value(item: &Value, path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = item;

    for part in parts {
        // Handle array index
        if let Ok(idx) = part.parse::<usize>() {
            current = match current.get(idx) {
                Some(v) => v,
                None => return "-".to_string(),
            };
        } else {
            current = match current.get(part) {
                Some(v) => v,
                None => return "-".to_string(),
            };
        }
    }

    match current {
        Value::String(s) if s.is_empty() => "-".to_string(),
        Value::String(s) if looks_like_timestamp(s) => format_timestamp_short(s),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(_) => "[object]".to_string(),
    }
}

fn looks_like_timestamp(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

/// Format timestamp to short form
fn format_timestamp_short(timestamp: &str) -> String {
    // RFC3339 format: 2023-01-15T10:30:00Z
    if timestamp.len() >= 10 {
        timestamp[..10].to_string()
    } else {
        timestamp.to_string()
    }
}

/// Fit a cell into a column, truncating with an ellipsis
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{:<width$}", text, width = width)
    } else if width <= 1 {
        text.chars().take(width).collect()
    } else {
        let cut: String = text.chars().take(width - 1).collect();
        format!("{}…", cut)
    }
}

fn render_row(columns: &[ColumnDef], cells: &[String]) -> String {
    columns
        .iter()
        .zip(cells)
        .map(|(c, cell)| fit(cell, c.width as usize))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Render items as a fixed-width table using the kind's columns
pub fn render_table(def: &ResourceDef, items: &[Value]) -> String {
    let headers: Vec<String> = def.columns.iter().map(|c| c.header.clone()).collect();
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(render_row(&def.columns, &headers));

    for item in items {
        let cells: Vec<String> = def
            .columns
            .iter()
            .map(|c| extract_json_value(item, &c.json_path))
            .collect();
        lines.push(render_row(&def.columns, &cells));
    }

    if items.is_empty() {
        lines.push(format!("No {} found.", def.display_name.to_lowercase()));
    }

    lines.join("\n")
}

/// Render any value in the requested format; tables need a definition
pub fn render(format: OutputFormat, def: Option<&ResourceDef>, value: &Value) -> Result<String> {
    match (format, def, value) {
        (OutputFormat::Json, _, _) => {
            serde_json::to_string_pretty(value).context("Failed to render JSON")
        }
        (OutputFormat::Yaml, _, _) => serde_yaml::to_string(value).context("Failed to render YAML"),
        (OutputFormat::Table, Some(def), Value::Array(items)) => Ok(render_table(def, items)),
        (OutputFormat::Table, Some(def), item @ Value::Object(_)) => {
            Ok(render_table(def, std::slice::from_ref(item)))
        }
        (OutputFormat::Table, _, other) => {
            serde_yaml::to_string(other).context("Failed to render value")
        }
    }
}
