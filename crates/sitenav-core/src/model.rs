//! Sidebar and site metadata types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Site logo shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    /// Asset path, resolved by the site framework
    pub src: String,
}

/// Global site metadata used for the page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteMetadata {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) logo: Option<Logo>,
    pub(crate) social: BTreeMap<String, String>,
    pub(crate) custom_css: Vec<String>,
}

impl SiteMetadata {
    /// Site title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description for SEO.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Logo asset, if any.
    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    /// Social links keyed by platform name (e.g. "github").
    pub fn social(&self) -> &BTreeMap<String, String> {
        &self.social
    }

    /// Custom stylesheets, in inclusion order.
    pub fn custom_css(&self) -> &[String] {
        &self.custom_css
    }
}

/// A sidebar entry pointing at a content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLeaf {
    pub(crate) label: String,
    pub(crate) slug: String,
}

impl NavigationLeaf {
    pub fn new(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Content identifier this leaf links to.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// A collapsible sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationGroup {
    pub(crate) label: String,
    pub(crate) items: Vec<SidebarItem>,
}

impl NavigationGroup {
    pub fn new(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Child entries in rendering order.
    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }
}

/// One node of the sidebar tree.
///
/// Serialized without a tag: groups carry `items`, leaves carry `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Group(NavigationGroup),
    Leaf(NavigationLeaf),
}

impl SidebarItem {
    /// Display label of the group or leaf.
    pub fn label(&self) -> &str {
        match self {
            SidebarItem::Group(group) => group.label(),
            SidebarItem::Leaf(leaf) => leaf.label(),
        }
    }
}

impl From<NavigationGroup> for SidebarItem {
    fn from(group: NavigationGroup) -> Self {
        SidebarItem::Group(group)
    }
}

impl From<NavigationLeaf> for SidebarItem {
    fn from(leaf: NavigationLeaf) -> Self {
        SidebarItem::Leaf(leaf)
    }
}

/// Position of a node in the sidebar tree, as indices from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the `index`-th top-level sidebar entry.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indices = self.0.iter();
        match indices.next() {
            Some(first) => write!(f, "sidebar[{}]", first)?,
            None => return f.write_str("sidebar"),
        }
        for index in indices {
            write!(f, ".items[{}]", index)?;
        }
        Ok(())
    }
}

/// The complete, validated site descriptor handed to the site framework.
///
/// Only obtainable through [`crate::SiteBuilder::build`] or
/// [`SiteConfiguration::from_toml_str`], both of which validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfiguration {
    pub(crate) metadata: SiteMetadata,
    pub(crate) sidebar: Vec<SidebarItem>,
}

impl SiteConfiguration {
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Top-level sidebar entries in rendering order.
    pub fn sidebar(&self) -> &[SidebarItem] {
        &self.sidebar
    }

    /// All leaves, depth-first in declaration order.
    pub fn leaves(&self) -> Vec<(NodePath, &NavigationLeaf)> {
        let mut out = Vec::new();
        for (index, item) in self.sidebar.iter().enumerate() {
            collect_leaves(item, NodePath::root(index), &mut out);
        }
        out
    }

    /// All leaf slugs in declaration order.
    pub fn slugs(&self) -> Vec<&str> {
        self.leaves()
            .into_iter()
            .map(|(_, leaf)| leaf.slug())
            .collect()
    }
}

fn collect_leaves<'a>(
    item: &'a SidebarItem,
    path: NodePath,
    out: &mut Vec<(NodePath, &'a NavigationLeaf)>,
) {
    match item {
        SidebarItem::Leaf(leaf) => out.push((path, leaf)),
        SidebarItem::Group(group) => {
            for (index, child) in group.items.iter().enumerate() {
                collect_leaves(child, path.child(index), out);
            }
        }
    }
}
