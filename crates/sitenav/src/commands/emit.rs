//! Write the descriptor in the site framework's config shape.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use sitenav_core::SiteConfiguration;

use super::{load_site, Source};

/// Output format for the emit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Starlight options object as JSON
    Json,
    /// Complete astro.config.mjs module
    Astro,
}

/// Render the descriptor in the given format.
pub fn render(site: &SiteConfiguration, format: Format, source: &Source) -> Result<String> {
    let rendered = match format {
        Format::Json => sitenav_core::to_json(site)?,
        Format::Astro => {
            let path = source.path().map(|p| p.display().to_string());
            sitenav_core::astro_config(site, path.as_deref())?
        }
    };
    Ok(rendered)
}

/// Run the emit command.
pub fn run(config: &Path, format: Format, output: Option<PathBuf>) -> Result<()> {
    let (site, source) = load_site(config)?;
    let rendered = render(&site, format, &source)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
