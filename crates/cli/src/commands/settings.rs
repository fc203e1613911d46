//! Settings command implementation.
//!
//! Applies the env file (if any) and prints the effective runtime settings.
//! A failed load is reported as a warning; the build-time defaults are
//! printed in that case, mirroring how the application keeps running.

use anyhow::Result;
use astra_config::{
    DeploymentStage, EnvLoader, GlobalSettings, last_load_error, load_environment_with, settings,
};

use crate::output::{OutputFormat, REDACTED, format_json, format_table};

pub fn run(loader: &EnvLoader, format: OutputFormat) -> Result<()> {
    load_environment_with(loader, &mut GlobalSettings);
    if let Some(err) = last_load_error() {
        eprintln!("Warning: {}; using build-time defaults", err);
    }

    let summary = settings::current().summary();
    let output = match format {
        OutputFormat::Json => format_json(&summary)?,
        OutputFormat::Table => {
            let mut rows = vec![("Stage".to_string(), summary.stage.to_string())];
            for stage in DeploymentStage::ALL {
                rows.push((
                    format!("URL ({})", stage),
                    summary
                        .urls
                        .get(&stage)
                        .cloned()
                        .unwrap_or_else(|| "(not set)".to_string()),
                ));
            }
            rows.push((
                "Sentry DSN".to_string(),
                if summary.sentry_dsn_configured {
                    REDACTED.to_string()
                } else {
                    "(not set)".to_string()
                },
            ));
            rows.push((
                "Sentry endpoint".to_string(),
                summary
                    .sentry_endpoint
                    .clone()
                    .unwrap_or_else(|| "(not set)".to_string()),
            ));
            format_table(&rows)
        }
    };
    print!("{}", output);
    Ok(())
}
