//! Index of the documents in a Starlight content directory.
//!
//! Scans the directory, resolves each document's slug and answers which
//! sidebar slugs have no document behind them.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use sitenav_core::{NodePath, SiteConfiguration};

use crate::frontmatter::{extract_frontmatter, FrontmatterError};

const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "mdoc"];

/// A sidebar leaf whose slug matches no document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dangling {
    /// Position of the leaf in the sidebar
    pub path: NodePath,

    /// The unresolved slug
    pub slug: String,
}

/// Slugs of all documents found in a content directory.
#[derive(Debug, Default)]
pub struct ContentIndex {
    /// Source file by slug
    documents: BTreeMap<String, PathBuf>,

    /// Slugs of documents marked `draft: true`
    drafts: BTreeSet<String>,
}

impl ContentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a content directory and index every document in it.
    pub fn scan(content_dir: &Path) -> Result<Self, ContentError> {
        if !content_dir.is_dir() {
            return Err(ContentError::DirectoryNotFound(
                content_dir.display().to_string(),
            ));
        }

        let mut index = Self::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            // Underscore-prefixed files are partials, not pages
            let is_partial = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('_'));
            if is_partial {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !CONTENT_EXTENSIONS.contains(&ext) {
                continue;
            }

            let content = fs::read_to_string(path).map_err(|e| ContentError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let frontmatter =
                extract_frontmatter(&content).map_err(|source| ContentError::Frontmatter {
                    path: path.display().to_string(),
                    source,
                })?;

            let relative = path.strip_prefix(content_dir).unwrap_or(path);
            let frontmatter = frontmatter.unwrap_or_default();
            let slug = match frontmatter.slug {
                Some(slug) => slug.trim_matches('/').to_string(),
                None => slug_from_path(relative),
            };

            if frontmatter.draft {
                index.drafts.insert(slug.clone());
            }
            index.insert(slug, path.to_path_buf());
        }

        tracing::info!(
            "Indexed {} documents from {}",
            index.len(),
            content_dir.display()
        );

        Ok(index)
    }

    /// Register a document. The first document claiming a slug wins.
    pub fn insert(&mut self, slug: impl Into<String>, source: PathBuf) {
        let slug = slug.into();
        if let Some(existing) = self.documents.get(&slug) {
            tracing::warn!(
                "Slug '{}' claimed by both {} and {}; keeping the first",
                slug,
                existing.display(),
                source.display()
            );
            return;
        }
        self.documents.insert(slug, source);
    }

    /// Check if a document exists for a slug.
    pub fn contains(&self, slug: &str) -> bool {
        self.documents.contains_key(slug)
    }

    /// Source file of the document behind a slug.
    pub fn source(&self, slug: &str) -> Option<&Path> {
        self.documents.get(slug).map(PathBuf::as_path)
    }

    /// Check if the document behind a slug is a draft.
    pub fn is_draft(&self, slug: &str) -> bool {
        self.drafts.contains(slug)
    }

    /// All indexed slugs, sorted.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Sidebar leaves whose slug has no document, in sidebar order.
    pub fn dangling(&self, site: &SiteConfiguration) -> Vec<Dangling> {
        site.leaves()
            .into_iter()
            .filter(|(_, leaf)| !self.contains(leaf.slug()))
            .map(|(path, leaf)| Dangling {
                path,
                slug: leaf.slug().to_string(),
            })
            .collect()
    }

    /// Indexed documents that no sidebar leaf links to.
    pub fn unlisted<'a>(&'a self, site: &SiteConfiguration) -> Vec<&'a str> {
        let listed: HashSet<&str> = site.slugs().into_iter().collect();
        self.slugs().filter(|slug| !listed.contains(slug)).collect()
    }
}

/// Derive a slug from a document path relative to the content directory.
///
/// Segments are slugified the way the site framework does it: lowercased,
/// spaces become `-`, punctuation other than `-` and `_` is dropped. So
/// `config/Basic.md` becomes `config/basic` and `v1.2.md` becomes `v12`. A
/// trailing `index` segment is dropped unless it is the only segment.
pub fn slug_from_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");

    let mut segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(slugify_segment)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() > 1 && segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }

    segments.join("/")
}

fn slugify_segment(segment: &str) -> String {
    segment
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || matches!(c, '-' | '_') => Some(c),
            _ => None,
        })
        .collect()
}

/// Errors that can occur while indexing content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse frontmatter in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitenav_core::SiteBuilder;
    use tempfile::tempdir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn derives_slugs_from_paths() {
        assert_eq!(slug_from_path(Path::new("introduction.mdx")), "introduction");
        assert_eq!(slug_from_path(Path::new("config/basic.md")), "config/basic");
        assert_eq!(slug_from_path(Path::new("Auth/OAuth.md")), "auth/oauth");
        assert_eq!(slug_from_path(Path::new("testing/index.md")), "testing");
        assert_eq!(slug_from_path(Path::new("index.mdx")), "index");
        assert_eq!(slug_from_path(Path::new("guides/Quick Start.md")), "guides/quick-start");
        assert_eq!(slug_from_path(Path::new("deployment/v1.2.md")), "deployment/v12");
        assert_eq!(slug_from_path(Path::new("a_b/c-d.mdx")), "a_b/c-d");
    }

    #[test]
    fn scans_content_directory() {
        let temp = tempdir().unwrap();
        let docs = temp.path();

        write(docs, "introduction.mdx", "---\ntitle: Intro\n---\n# Intro");
        write(docs, "config/basic.md", "# Basic");
        write(docs, "moved.md", "---\ntitle: Moved\nslug: config/advanced\n---\n");
        write(docs, "notes.txt", "not content");
        write(docs, "wip.md", "---\ntitle: WIP\ndraft: true\n---\n");

        let index = ContentIndex::scan(docs).unwrap();

        assert_eq!(
            index.slugs().collect::<Vec<_>>(),
            vec!["config/advanced", "config/basic", "introduction", "wip"]
        );
        assert!(index.is_draft("wip"));
        assert!(!index.is_draft("introduction"));
        assert_eq!(index.source("config/advanced"), Some(docs.join("moved.md").as_path()));
    }

    #[test]
    fn skips_partials_and_reads_frontmatter_after_bom() {
        let temp = tempdir().unwrap();
        let docs = temp.path();

        write(docs, "_partial.md", "# Included elsewhere");
        write(docs, "guides/_snippet.mdx", "# Snippet");
        write(docs, "bom.md", "\u{feff}---\nslug: moved\ndraft: true\n---\n# Bom");

        let index = ContentIndex::scan(docs).unwrap();

        assert_eq!(index.slugs().collect::<Vec<_>>(), vec!["moved"]);
        assert!(index.is_draft("moved"));
    }

    #[test]
    fn empty_directory_gives_empty_index() {
        let temp = tempdir().unwrap();
        write(temp.path(), "_only_partial.md", "# Partial");

        let index = ContentIndex::scan(temp.path()).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let result = ContentIndex::scan(&temp.path().join("nope"));

        assert!(matches!(result, Err(ContentError::DirectoryNotFound(_))));
    }

    #[test]
    fn bad_frontmatter_names_the_file() {
        let temp = tempdir().unwrap();
        write(temp.path(), "broken.md", "---\ntitle: x\n");

        let err = ContentIndex::scan(temp.path()).unwrap_err();

        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn first_document_keeps_a_contested_slug() {
        let mut index = ContentIndex::new();
        index.insert("intro", PathBuf::from("a.md"));
        index.insert("intro", PathBuf::from("b.md"));

        assert_eq!(index.len(), 1);
        assert_eq!(index.source("intro"), Some(Path::new("a.md")));
    }

    #[test]
    fn reports_dangling_and_unlisted() {
        let mut index = ContentIndex::new();
        index.insert("introduction", PathBuf::from("introduction.md"));
        index.insert("config/basic", PathBuf::from("config/basic.md"));
        index.insert("changelog", PathBuf::from("changelog.md"));

        let site = SiteBuilder::new("Docs")
            .group("Start", |g| {
                g.leaf("Intro", "introduction").leaf("Missing", "quick-start")
            })
            .group("Config", |g| g.leaf("Basic", "config/basic"))
            .build()
            .unwrap();

        assert_eq!(
            index.dangling(&site),
            vec![Dangling {
                path: NodePath::root(0).child(1),
                slug: "quick-start".to_string(),
            }]
        );
        assert_eq!(index.unlisted(&site), vec!["changelog"]);
    }
}
