//! Validate the descriptor, optionally against a content directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use sitenav_content::ContentIndex;

use super::load_site;

/// Run the check command.
pub fn run(config: &Path, content: Option<PathBuf>) -> Result<()> {
    let (site, _) = load_site(config)?;

    tracing::info!(
        "Descriptor OK: {} sidebar entries, {} pages",
        site.sidebar().len(),
        site.slugs().len()
    );

    let Some(content_dir) = content else {
        return Ok(());
    };

    let index = ContentIndex::scan(&content_dir)?;
    if index.is_empty() {
        tracing::warn!("No documents found in {}", content_dir.display());
    }

    for slug in site.slugs() {
        if index.is_draft(slug) {
            tracing::warn!("Sidebar links draft '{}', excluded from production builds", slug);
        }
    }

    for slug in index.unlisted(&site) {
        tracing::warn!("Document '{}' is not linked from the sidebar", slug);
    }

    let dangling = index.dangling(&site);
    if !dangling.is_empty() {
        for entry in &dangling {
            tracing::error!("{}: no document for slug '{}'", entry.path, entry.slug);
        }
        anyhow::bail!(
            "{} sidebar slug(s) have no document in {}",
            dangling.len(),
            content_dir.display()
        );
    }

    tracing::info!("All sidebar slugs resolve in {}", content_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SITE: &str = r#"
title = "Docs"

[[sidebar]]
label = "Start"
items = [
    { label = "Intro", slug = "introduction" },
    { label = "Basic", slug = "config/basic" },
]
"#;

    #[test]
    fn passes_when_every_slug_resolves() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        let docs = temp.path().join("docs");
        fs::write(&config, SITE).unwrap();
        fs::create_dir_all(docs.join("config")).unwrap();
        fs::write(docs.join("introduction.mdx"), "# Intro").unwrap();
        fs::write(docs.join("config/basic.md"), "# Basic").unwrap();

        run(&config, Some(docs)).unwrap();
    }

    #[test]
    fn fails_on_dangling_slug() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        let docs = temp.path().join("docs");
        fs::write(&config, SITE).unwrap();
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("introduction.mdx"), "# Intro").unwrap();

        let err = run(&config, Some(docs)).unwrap_err();

        assert!(err.to_string().starts_with("1 sidebar slug(s) have no document"));
    }

    #[test]
    fn empty_content_dir_reports_every_slug() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        let docs = temp.path().join("docs");
        fs::write(&config, SITE).unwrap();
        fs::create_dir_all(&docs).unwrap();

        let err = run(&config, Some(docs)).unwrap_err();

        assert!(err.to_string().starts_with("2 sidebar slug(s) have no document"));
    }

    #[test]
    fn validates_without_content_dir() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, SITE).unwrap();

        run(&config, None).unwrap();
    }
}
