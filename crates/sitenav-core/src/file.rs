//! `site.toml` loading and writing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use toml::Value;

use crate::model::{
    Logo, NavigationGroup, NavigationLeaf, NodePath, SidebarItem, SiteConfiguration,
    SiteMetadata,
};
use crate::validate::{validate, ConfigError, Violation};

/// On-disk shape of `site.toml`.
///
/// Sidebar entries are read as raw TOML values on load, so a malformed entry
/// can be reported at its position in the tree.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteFile<I> {
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    /// Paths to CSS stylesheets to include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    custom_css: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logo: Option<Logo>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    social: BTreeMap<String, String>,
    #[serde(default = "Vec::new")]
    sidebar: Vec<I>,
}

/// A sidebar entry before its shape is known.
#[derive(Debug, Deserialize)]
struct RawItem {
    label: Option<Value>,
    slug: Option<Value>,
    items: Option<Value>,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

impl SiteConfiguration {
    /// Parse and validate a descriptor from `site.toml` content.
    ///
    /// Structural problems in sidebar entries (unknown keys, wrong value
    /// types) are reported first; content checks run once the tree is sound.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: SiteFile<Value> =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut violations = Vec::new();
        let sidebar: Vec<SidebarItem> = file
            .sidebar
            .into_iter()
            .enumerate()
            .map(|(index, value)| convert_item(value, NodePath::root(index), &mut violations))
            .collect();
        if !violations.is_empty() {
            return Err(ConfigError::Invalid(violations));
        }

        let metadata = SiteMetadata {
            title: file.title,
            description: file.description,
            logo: file.logo,
            social: file.social,
            custom_css: file.custom_css,
        };
        validate(&metadata, &sidebar)?;

        Ok(Self { metadata, sidebar })
    }

    /// Render the descriptor as `site.toml` content.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let file = SiteFile {
            title: self.metadata.title.clone(),
            description: self.metadata.description.clone(),
            custom_css: self.metadata.custom_css.clone(),
            logo: self.metadata.logo.clone(),
            social: self.metadata.social.clone(),
            sidebar: self.sidebar.clone(),
        };
        toml::to_string(&file).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

fn convert_item(value: Value, path: NodePath, violations: &mut Vec<Violation>) -> SidebarItem {
    let found = value.type_str().to_string();
    let raw = match value {
        Value::Table(table) => RawItem::deserialize(Value::Table(table)).ok(),
        _ => None,
    };
    let Some(raw) = raw else {
        violations.push(Violation::NotATable {
            path: path.clone(),
            found,
        });
        return SidebarItem::Leaf(NavigationLeaf::new("", ""));
    };

    for key in raw.unknown.keys() {
        violations.push(Violation::UnknownKey {
            path: path.clone(),
            key: key.clone(),
        });
    }

    let label = string_field(raw.label, "label", &path, violations);

    match raw.items {
        Some(items) => {
            if raw.slug.is_some() {
                violations.push(Violation::SlugAndItems { path: path.clone() });
            }
            let children = match items {
                Value::Array(children) => children
                    .into_iter()
                    .enumerate()
                    .map(|(index, child)| convert_item(child, path.child(index), violations))
                    .collect(),
                other => {
                    violations.push(Violation::WrongType {
                        path: path.clone(),
                        key: "items",
                        expected: "an array",
                        found: other.type_str().to_string(),
                    });
                    Vec::new()
                }
            };
            SidebarItem::Group(NavigationGroup::new(label, children))
        }
        None => {
            let slug = string_field(raw.slug, "slug", &path, violations);
            SidebarItem::Leaf(NavigationLeaf::new(label, slug))
        }
    }
}

/// A missing string field becomes empty and is left to `validate`.
fn string_field(
    value: Option<Value>,
    key: &'static str,
    path: &NodePath,
    violations: &mut Vec<Violation>,
) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            violations.push(Violation::WrongType {
                path: path.clone(),
                key,
                expected: "a string",
                found: other.type_str().to_string(),
            });
            String::new()
        }
    }
}
