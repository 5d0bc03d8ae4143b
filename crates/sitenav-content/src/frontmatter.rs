//! Frontmatter extraction for content documents.

use serde::Deserialize;

/// The frontmatter fields that affect slug resolution.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Custom slug override
    #[serde(default)]
    pub slug: Option<String>,

    /// Draft pages are excluded from production builds
    #[serde(default)]
    pub draft: bool,
}

/// Extract frontmatter from a markdown document.
///
/// Returns `None` when the document has no frontmatter block. Unknown keys are
/// ignored since the site framework owns the full schema.
pub fn extract_frontmatter(source: &str) -> Result<Option<Frontmatter>, FrontmatterError> {
    let trimmed = source.trim_start_matches('\u{feff}').trim_start();

    if !trimmed.starts_with("---") {
        return Ok(None);
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    if yaml_content.is_empty() {
        return Ok(Some(Frontmatter::default()));
    }

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok(Some(frontmatter))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_slug_override() {
        let source = r#"---
title: Basic Configuration
slug: config/basic
sidebar:
  order: 1
---

# Basic
"#;

        let fm = extract_frontmatter(source).unwrap().unwrap();

        assert_eq!(fm.slug.as_deref(), Some("config/basic"));
        assert!(!fm.draft);
    }

    #[test]
    fn reads_frontmatter_after_byte_order_mark() {
        let source = "\u{feff}---\nslug: moved\ndraft: true\n---\n# Moved";

        let fm = extract_frontmatter(source).unwrap().unwrap();

        assert_eq!(fm.slug.as_deref(), Some("moved"));
        assert!(fm.draft);
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        assert!(extract_frontmatter(source).unwrap().is_none());
    }

    #[test]
    fn handles_empty_frontmatter() {
        let fm = extract_frontmatter("---\n---\n# Empty").unwrap();

        assert_eq!(fm, Some(Frontmatter::default()));
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let result = extract_frontmatter("---\ntitle: Test\n# No closing");

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let result = extract_frontmatter("---\ntitle: [invalid yaml\n---\n");

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
