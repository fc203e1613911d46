//! Check command implementation.
//!
//! Runs a full load attempt against the process-wide settings and reports
//! what was applied. Values are never printed; only key names.

use anyhow::Result;
use astra_config::{EnvLoader, GlobalSettings, last_load_error, load_environment_with, settings};
use serde::Serialize;
use tracing::info;

use crate::output::{OutputFormat, format_json, format_table};

#[derive(Debug, Serialize)]
struct CheckReport {
    status: &'static str,
    path: Option<String>,
    packaged: bool,
    keys: Vec<String>,
    settings: astra_config::SettingsSummary,
}

pub fn run(loader: &EnvLoader, format: OutputFormat) -> Result<()> {
    info!("Checking runtime env file {}", loader.file_name());

    let loaded = load_environment_with(loader, &mut GlobalSettings);
    if let Some(err) = last_load_error() {
        return Err(anyhow::Error::from(err).context("Runtime environment check failed"));
    }

    let report = match &loaded {
        Some(loaded) => CheckReport {
            status: "loaded",
            path: Some(loaded.path.display().to_string()),
            packaged: loader.packaging().is_packaged(),
            keys: loaded.keys().map(str::to_string).collect(),
            settings: settings::current().summary(),
        },
        None => CheckReport {
            status: "disabled",
            path: None,
            packaged: loader.packaging().is_packaged(),
            keys: Vec::new(),
            settings: settings::current().summary(),
        },
    };

    let output = match format {
        OutputFormat::Json => format_json(&report)?,
        OutputFormat::Table => format_table(&report_rows(&report)),
    };
    print!("{}", output);
    Ok(())
}

fn report_rows(report: &CheckReport) -> Vec<(String, String)> {
    let mut rows = vec![("Status".to_string(), report.status.to_string())];
    if let Some(path) = &report.path {
        rows.push(("Env file".to_string(), path.clone()));
    }
    rows.push((
        "Packaged".to_string(),
        if report.packaged { "yes" } else { "no" }.to_string(),
    ));
    if !report.keys.is_empty() {
        rows.push(("Keys".to_string(), report.keys.join(", ")));
    }
    rows.push(("Stage".to_string(), report.settings.stage.to_string()));
    rows.push((
        "URL".to_string(),
        report
            .settings
            .current_url
            .clone()
            .unwrap_or_else(|| "(not set)".to_string()),
    ));
    rows
}
