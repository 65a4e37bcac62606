//! Config commands - inspect and create the CLI config file

use anyhow::{bail, Result};
use arkeo_lib::RestConfig;
use std::path::Path;

use crate::config::CliConfig;
use crate::ui;

/// Show the effective configuration after all layers are applied.
#[tracing::instrument(skip(config))]
pub fn show(config: &RestConfig, path: Option<&Path>, json: bool) -> Result<()> {
    if json {
        return ui::json(config);
    }

    ui::header("Configuration");
    match path {
        Some(path) if path.exists() => ui::key_value("Config file", &path.display().to_string()),
        Some(path) => ui::key_value("Config file", &format!("{} (not found)", path.display())),
        None => ui::key_value("Config file", "-"),
    }
    ui::key_value("API URL", &config.api_url);
    ui::key_value("Network", config.network.as_str());
    ui::key_value("Address prefix", config.network.address_prefix());
    ui::key_value("Timeout", &format!("{}s", config.timeout_secs));
    ui::key_value("Page limit", &config.page_limit.to_string());
    ui::key_value("Max pages", &config.max_pages.to_string());
    Ok(())
}

/// Write a config file with the given values.
#[tracing::instrument]
pub fn init(path: &Path, values: CliConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    // Reject values that would not resolve later.
    values.clone().into_rest_config()?;
    values.save(path)?;

    ui::success(&format!("Wrote {}", path.display()));
    Ok(())
}
