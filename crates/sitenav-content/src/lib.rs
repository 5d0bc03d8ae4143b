//! Content directory index for checking sidebar slugs.
//!
//! Resolving slugs is ultimately the site framework's job; this crate lets a
//! build catch dangling sidebar links before the framework runs.

pub mod frontmatter;
pub mod index;

pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use index::{slug_from_path, ContentError, ContentIndex, Dangling};
