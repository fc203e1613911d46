//! Output formatting for command results.
//!
//! Responsibilities:
//! - Define the supported output formats.
//! - Render key/value rows as an aligned table, or any serializable value as JSON.
//!
//! Invariants:
//! - Formatters never redact on their own; callers pass already-redacted data.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Placeholder printed instead of env values.
pub const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Render `rows` as a two-column table with aligned values.
pub fn format_table(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
    }
    output
}

/// Render `value` as pretty-printed JSON with a trailing newline.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}
