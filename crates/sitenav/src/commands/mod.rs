//! CLI subcommands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sitenav_core::SiteConfiguration;

pub mod check;
pub mod emit;
pub mod init;
pub mod tree;

/// Where a loaded descriptor came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    BuiltIn,
}

impl Source {
    /// The config file, or `None` for the built-in descriptor.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::File(path) => Some(path.as_path()),
            Source::BuiltIn => None,
        }
    }
}

/// Load the descriptor from `config` if it exists, else use the built-in one.
/// Returns an error if the config file exists but is malformed or invalid.
pub fn load_site(config: &Path) -> Result<(SiteConfiguration, Source)> {
    if config.exists() {
        let content = fs::read_to_string(config)
            .with_context(|| format!("Failed to read {}", config.display()))?;
        let site = SiteConfiguration::from_toml_str(&content)
            .with_context(|| format!("Invalid descriptor in {}", config.display()))?;
        tracing::info!("Loaded descriptor from {}", config.display());
        return Ok((site, Source::File(config.to_path_buf())));
    }

    tracing::debug!("{} not found, using built-in descriptor", config.display());
    let site = crate::site::descriptor().context("Built-in descriptor is invalid")?;
    Ok((site, Source::BuiltIn))
}
