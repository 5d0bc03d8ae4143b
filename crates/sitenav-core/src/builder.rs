//! Builder for site descriptors.

use crate::model::{
    Logo, NavigationGroup, NavigationLeaf, SidebarItem, SiteConfiguration, SiteMetadata,
};
use crate::validate::{validate, ConfigError};

/// Builds a [`SiteConfiguration`] in declaration order.
///
/// ```
/// use sitenav_core::SiteBuilder;
///
/// let site = SiteBuilder::new("My Docs")
///     .group("Getting Started", |g| {
///         g.leaf("Introduction", "introduction")
///             .leaf("Quick Start", "quick-start")
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(site.sidebar().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteBuilder {
    metadata: SiteMetadata,
    sidebar: Vec<SidebarItem>,
}

impl SiteBuilder {
    /// Start a descriptor with the given site title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            metadata: SiteMetadata {
                title: title.into(),
                ..Default::default()
            },
            sidebar: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    pub fn logo(mut self, src: impl Into<String>) -> Self {
        self.metadata.logo = Some(Logo { src: src.into() });
        self
    }

    /// Add a social link. A repeated platform replaces the earlier URL.
    pub fn social(mut self, platform: impl Into<String>, url: impl Into<String>) -> Self {
        self.metadata.social.insert(platform.into(), url.into());
        self
    }

    /// Append a custom stylesheet.
    pub fn custom_css(mut self, path: impl Into<String>) -> Self {
        self.metadata.custom_css.push(path.into());
        self
    }

    /// Append a group whose items are declared by `items`.
    pub fn group(
        mut self,
        label: impl Into<String>,
        items: impl FnOnce(GroupBuilder) -> GroupBuilder,
    ) -> Self {
        let group = items(GroupBuilder::new(label)).finish();
        self.sidebar.push(SidebarItem::Group(group));
        self
    }

    /// Append a top-level leaf.
    pub fn leaf(mut self, label: impl Into<String>, slug: impl Into<String>) -> Self {
        self.sidebar.push(SidebarItem::Leaf(NavigationLeaf::new(label, slug)));
        self
    }

    /// Validate and return the finished descriptor.
    pub fn build(self) -> Result<SiteConfiguration, ConfigError> {
        validate(&self.metadata, &self.sidebar)?;
        Ok(SiteConfiguration {
            metadata: self.metadata,
            sidebar: self.sidebar,
        })
    }
}

/// Collects the items of one sidebar group.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    label: String,
    items: Vec<SidebarItem>,
}

impl GroupBuilder {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    pub fn leaf(mut self, label: impl Into<String>, slug: impl Into<String>) -> Self {
        self.items.push(SidebarItem::Leaf(NavigationLeaf::new(label, slug)));
        self
    }

    /// Append a nested group.
    pub fn group(
        mut self,
        label: impl Into<String>,
        items: impl FnOnce(GroupBuilder) -> GroupBuilder,
    ) -> Self {
        let group = items(GroupBuilder::new(label)).finish();
        self.items.push(SidebarItem::Group(group));
        self
    }

    fn finish(self) -> NavigationGroup {
        NavigationGroup::new(self.label, self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodePath;
    use crate::validate::Violation;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn two_groups() -> SiteBuilder {
        SiteBuilder::new("Docs")
            .group("Getting Started", |g| {
                g.leaf("Introduction", "introduction")
                    .leaf("Quick Start", "quick-start")
                    .leaf("Installation", "installation")
            })
            .group("Configuration", |g| {
                g.leaf("Basic", "config/basic")
                    .leaf("Advanced", "config/advanced")
            })
    }

    #[test]
    fn preserves_declaration_order() {
        let site = two_groups().build().unwrap();
        let sidebar = site.sidebar();

        assert_eq!(sidebar.len(), 2);
        assert_eq!(sidebar[0].label(), "Getting Started");
        assert_eq!(sidebar[1].label(), "Configuration");

        let SidebarItem::Group(first) = &sidebar[0] else {
            panic!("expected group");
        };
        let labels: Vec<&str> = first.items().iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["Introduction", "Quick Start", "Installation"]);

        assert_eq!(
            site.slugs(),
            vec![
                "introduction",
                "quick-start",
                "installation",
                "config/basic",
                "config/advanced"
            ]
        );
    }

    #[test]
    fn groups_keep_order_for_many_entries() {
        let site = SiteBuilder::new("Docs")
            .group("C", |g| g.leaf("c", "c"))
            .group("A", |g| g.leaf("a", "a"))
            .group("B", |g| g.leaf("b", "b"))
            .build()
            .unwrap();

        let labels: Vec<&str> = site.sidebar().iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(two_groups().build().unwrap(), two_groups().build().unwrap());
    }

    #[test]
    fn empty_slug_fails_build() {
        let err = SiteBuilder::new("Docs")
            .group("Start", |g| g.leaf("Nothing", ""))
            .build()
            .unwrap_err();

        assert_eq!(
            err.violations(),
            &[Violation::EmptySlug {
                path: NodePath::root(0).child(0)
            }]
        );
    }

    #[test]
    fn duplicate_slug_fails_build() {
        let err = two_groups()
            .group("Again", |g| g.leaf("Intro", "introduction"))
            .build()
            .unwrap_err();

        assert!(err
            .to_string()
            .contains("duplicate slug \"introduction\" at sidebar[0].items[0] and sidebar[2].items[0]"));
    }

    #[test]
    fn collects_metadata() {
        let site = SiteBuilder::new("Docs")
            .description("About things")
            .logo("./src/assets/logo.svg")
            .social("github", "https://github.com/example/docs")
            .custom_css("./src/styles/a.css")
            .custom_css("./src/styles/b.css")
            .leaf("Home", "index")
            .build()
            .unwrap();

        let meta = site.metadata();
        assert_eq!(meta.title(), "Docs");
        assert_eq!(meta.description(), "About things");
        assert_eq!(meta.logo().map(|l| l.src.as_str()), Some("./src/assets/logo.svg"));
        assert_eq!(
            meta.social(),
            &BTreeMap::from([(
                "github".to_string(),
                "https://github.com/example/docs".to_string()
            )])
        );
        assert_eq!(meta.custom_css(), &["./src/styles/a.css", "./src/styles/b.css"]);
    }

    #[test]
    fn nested_groups_are_validated() {
        let err = SiteBuilder::new("Docs")
            .group("Outer", |g| g.group("Inner", |g| g.leaf("Bad", "Bad/Slug")))
            .build()
            .unwrap_err();

        assert!(err
            .to_string()
            .contains("sidebar[0].items[0].items[0]: invalid slug"));
    }
}
