//! Structural validation of site descriptors.
//!
//! Every check runs before the descriptor is handed to the site framework, so a
//! bad entry fails the build instead of producing a broken page.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{NodePath, SidebarItem, SiteMetadata};

static INVALID_SLUG_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9._-]").expect("Invalid slug char regex"));

/// Why a slug does not follow the content store's naming convention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,

    #[error("slug must not start with '/'")]
    LeadingSlash,

    #[error("slug must not end with '/'")]
    TrailingSlash,

    #[error("slug contains an empty path segment")]
    EmptySegment,

    #[error("slug contains a relative segment '{0}'")]
    RelativeSegment(String),

    #[error("slug must be lowercase, found '{0}'")]
    Uppercase(char),

    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Check a slug against the content store convention: lowercase, path-like
/// segments of `[a-z0-9._-]` joined by single slashes, no leading slash.
pub fn check_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.starts_with('/') {
        return Err(SlugError::LeadingSlash);
    }
    if slug.ends_with('/') {
        return Err(SlugError::TrailingSlash);
    }

    for segment in slug.split('/') {
        if segment.is_empty() {
            return Err(SlugError::EmptySegment);
        }
        if segment == "." || segment == ".." {
            return Err(SlugError::RelativeSegment(segment.to_string()));
        }
        if let Some(bad) = INVALID_SLUG_CHAR_RE.find(segment) {
            let c = bad.as_str().chars().next().unwrap_or('?');
            if c.is_uppercase() {
                return Err(SlugError::Uppercase(c));
            }
            return Err(SlugError::InvalidCharacter(c));
        }
    }

    Ok(())
}

/// Kind of sidebar node, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Group => f.write_str("group"),
            NodeKind::Leaf => f.write_str("leaf"),
        }
    }
}

/// A single problem found in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("site title is empty")]
    EmptyTitle,

    #[error("{field}: asset path is empty")]
    EmptyAssetPath { field: String },

    #[error("{path}: {kind} label is empty")]
    EmptyLabel { path: NodePath, kind: NodeKind },

    #[error("{path}: leaf slug is empty")]
    EmptySlug { path: NodePath },

    #[error("{path}: invalid slug {slug:?}: {reason}")]
    InvalidSlug {
        path: NodePath,
        slug: String,
        reason: SlugError,
    },

    #[error("duplicate slug {slug:?} at {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: NodePath,
        second: NodePath,
    },

    #[error("{path}: entry must be a table, found {found}")]
    NotATable { path: NodePath, found: String },

    #[error("{path}: unknown key '{key}'")]
    UnknownKey { path: NodePath, key: String },

    #[error("{path}: '{key}' must be {expected}, found {found}")]
    WrongType {
        path: NodePath,
        key: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{path}: entry has both 'slug' and 'items'")]
    SlugAndItems { path: NodePath },
}

/// Errors produced while building or loading a site descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration:\n{}", format_violations(.0))]
    Invalid(Vec<Violation>),

    #[error("Failed to parse site config: {0}")]
    Parse(String),

    #[error("Failed to serialize site config: {0}")]
    Serialize(String),
}

impl ConfigError {
    /// Violations behind an [`ConfigError::Invalid`], empty otherwise.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ConfigError::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate metadata and sidebar together, collecting every violation.
pub fn validate(metadata: &SiteMetadata, sidebar: &[SidebarItem]) -> Result<(), ConfigError> {
    let mut violations = Vec::new();

    if metadata.title.trim().is_empty() {
        violations.push(Violation::EmptyTitle);
    }

    if let Some(logo) = &metadata.logo {
        if logo.src.trim().is_empty() {
            violations.push(Violation::EmptyAssetPath {
                field: "logo.src".to_string(),
            });
        }
    }

    for (index, css) in metadata.custom_css.iter().enumerate() {
        if css.trim().is_empty() {
            violations.push(Violation::EmptyAssetPath {
                field: format!("customCss[{}]", index),
            });
        }
    }

    let mut seen: HashMap<&str, NodePath> = HashMap::new();
    for (index, item) in sidebar.iter().enumerate() {
        check_item(item, NodePath::root(index), &mut seen, &mut violations);
    }

    if violations.is_empty() {
        tracing::debug!("Validated {} sidebar slugs", seen.len());
        Ok(())
    } else {
        Err(ConfigError::Invalid(violations))
    }
}

fn check_item<'a>(
    item: &'a SidebarItem,
    path: NodePath,
    seen: &mut HashMap<&'a str, NodePath>,
    violations: &mut Vec<Violation>,
) {
    match item {
        SidebarItem::Group(group) => {
            if group.label.trim().is_empty() {
                violations.push(Violation::EmptyLabel {
                    path: path.clone(),
                    kind: NodeKind::Group,
                });
            }
            for (index, child) in group.items.iter().enumerate() {
                check_item(child, path.child(index), seen, violations);
            }
        }
        SidebarItem::Leaf(leaf) => {
            if leaf.label.trim().is_empty() {
                violations.push(Violation::EmptyLabel {
                    path: path.clone(),
                    kind: NodeKind::Leaf,
                });
            }

            match check_slug(&leaf.slug) {
                Ok(()) => {}
                Err(SlugError::Empty) => {
                    violations.push(Violation::EmptySlug { path: path.clone() });
                    return;
                }
                Err(reason) => violations.push(Violation::InvalidSlug {
                    path: path.clone(),
                    slug: leaf.slug.clone(),
                    reason,
                }),
            }

            if let Some(first) = seen.get(leaf.slug.as_str()) {
                violations.push(Violation::DuplicateSlug {
                    slug: leaf.slug.clone(),
                    first: first.clone(),
                    second: path,
                });
            } else {
                seen.insert(leaf.slug.as_str(), path);
            }
        }
    }
}
