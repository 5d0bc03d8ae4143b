//! Write a starter `site.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const HEADER: &str = "# Sidebar and site metadata for the Starlight docs site.\n\
# Validate with `sitenav check`, generate astro.config.mjs with `sitenav emit --format astro`.\n\n";

/// Run the init command.
pub fn run(config: &Path, yes: bool) -> Result<()> {
    if config.exists() && !yes {
        tracing::warn!("{} already exists. Use --yes to overwrite.", config.display());
        return Ok(());
    }

    let site = crate::site::descriptor().context("Built-in descriptor is invalid")?;
    let body = site.to_toml_string()?;

    fs::write(config, format!("{}{}", HEADER, body))
        .with_context(|| format!("Failed to write {}", config.display()))?;
    tracing::info!("Created {}", config.display());

    Ok(())
}
