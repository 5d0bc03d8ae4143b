//! Sidebar and site metadata descriptor for Starlight documentation sites.
//!
//! A descriptor is built once, validated (labels, slug convention, slug
//! uniqueness) and then emitted in the shape the Starlight integration takes.

pub mod builder;
pub mod emit;
pub mod file;
pub mod model;
pub mod validate;

pub use builder::{GroupBuilder, SiteBuilder};
pub use emit::{astro_config, starlight_options, to_json, EmitError};
pub use model::{
    Logo, NavigationGroup, NavigationLeaf, NodePath, SidebarItem, SiteConfiguration,
    SiteMetadata,
};
pub use validate::{check_slug, validate, ConfigError, NodeKind, SlugError, Violation};
