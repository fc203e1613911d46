//! Parse command implementation.
//!
//! Parses an env file with the loader's rules without exporting anything.

use anyhow::{Context, Result};
use astra_config::parse_env;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::output::{OutputFormat, REDACTED, format_json, format_table};

#[derive(Debug, Serialize)]
struct ParseReport {
    path: String,
    variables: BTreeMap<String, String>,
}

pub fn run(file: &Path, show_values: bool, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let variables = parse_env(&content)
        .into_iter()
        .map(|(key, value)| {
            let shown = if show_values { value } else { REDACTED.to_string() };
            (key, shown)
        })
        .collect();
    let report = ParseReport {
        path: file.display().to_string(),
        variables,
    };

    let output = match format {
        OutputFormat::Json => format_json(&report)?,
        OutputFormat::Table => {
            let rows: Vec<(String, String)> = report.variables.into_iter().collect();
            format_table(&rows)
        }
    };
    print!("{}", output);
    Ok(())
}
