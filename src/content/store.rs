//! Content store - read-only access to the on-disk blog records
//!
//! Posts are authored by an external pipeline and land as one JSON file per
//! record under the configured blogs directory. This module only ever reads;
//! the absence of a file is the only deletion signal it observes.
//!
//! The public surface (`list_published`, `get_by_slug`, `list_slugs`) never
//! fails: storage errors degrade to empty/absent results so a broken content
//! directory cannot take the site down. The `try_*` twins keep the underlying
//! `Result` visible for the HTTP layer and for tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{BlogPost, BlogSummary};

/// Errors from the storage layer, visible only through the `try_*` methods
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid slug {0:?}")]
    InvalidSlug(String),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("slug {declared:?} in {path} does not match its filename")]
    SlugMismatch { path: PathBuf, declared: String },
}

/// Read-only store over a directory of `<slug>.json` records
#[derive(Debug, Clone)]
pub struct ContentStore {
    blogs_dir: PathBuf,
}

impl ContentStore {
    pub fn new<P: AsRef<Path>>(blogs_dir: P) -> Self {
        Self {
            blogs_dir: blogs_dir.as_ref().to_path_buf(),
        }
    }

    /// List summaries of all published posts, newest first.
    ///
    /// Ordering is descending by `date`; posts sharing a date are ordered by
    /// slug ascending so the result is stable across filesystems.
    pub fn list_published(&self) -> Vec<BlogSummary> {
        match self.try_list_published() {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::warn!("Failed to list posts: {e}");
                Vec::new()
            }
        }
    }

    pub fn try_list_published(&self) -> Result<Vec<BlogSummary>, StoreError> {
        if !self.blogs_dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for path in self.record_files()? {
            match self.read_post(&path) {
                Ok(post) => {
                    if post.is_published() {
                        summaries.push(post.summary());
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {e}", path);
                }
            }
        }

        summaries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(summaries)
    }

    /// Fetch a single published post by slug.
    ///
    /// Missing files, malformed files and drafts all come back as `None`, so
    /// the existence of unpublished content is not observable here.
    pub fn get_by_slug(&self, slug: &str) -> Option<BlogPost> {
        match self.try_get_by_slug(slug) {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!("Failed to fetch post {slug:?}: {e}");
                None
            }
        }
    }

    pub fn try_get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        let path = self.slug_path(slug)?;
        if !path.exists() {
            return Ok(None);
        }

        match self.read_post(&path) {
            Ok(post) => Ok(Some(post).filter(BlogPost::is_published)),
            Err(e) => {
                tracing::warn!("Treating unreadable post {slug:?} as absent: {e}");
                Ok(None)
            }
        }
    }

    /// List the slugs of every record, drafts included.
    ///
    /// Unlike the other queries this is unfiltered by status: it feeds build
    /// tooling that must be able to address unpublished records. Order is
    /// directory enumeration order.
    pub fn list_slugs(&self) -> Vec<String> {
        match self.try_list_slugs() {
            Ok(slugs) => slugs,
            Err(e) => {
                tracing::warn!("Failed to list slugs: {e}");
                Vec::new()
            }
        }
    }

    pub fn try_list_slugs(&self) -> Result<Vec<String>, StoreError> {
        if !self.blogs_dir.exists() {
            return Ok(Vec::new());
        }

        let slugs = self
            .record_files()?
            .iter()
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()))
            .map(str::to_string)
            .collect();

        Ok(slugs)
    }

    /// Enumerate the `*.json` files under the blogs directory
    fn record_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = fs::read_dir(&self.blogs_dir).map_err(|source| StoreError::Io {
            path: self.blogs_dir.clone(),
            source,
        })?;

        let files = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_json_file(p))
            .collect();

        Ok(files)
    }

    /// Load and validate a single record file
    fn read_post(&self, path: &Path) -> Result<BlogPost, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let post: BlogPost =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // A record whose declared slug disagrees with its filename would be
        // unreachable by lookup, so treat it like a malformed file.
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        if post.slug != stem {
            return Err(StoreError::SlugMismatch {
                path: path.to_path_buf(),
                declared: post.slug,
            });
        }

        Ok(post)
    }

    /// Map a caller-supplied slug to its storage path.
    ///
    /// Slugs come from URLs and must be treated as opaque identifiers, not
    /// path fragments: anything that could escape the blogs directory is
    /// rejected before a path is built.
    fn slug_path(&self, slug: &str) -> Result<PathBuf, StoreError> {
        if slug.is_empty()
            || slug.contains('/')
            || slug.contains('\\')
            || slug.contains("..")
            || slug.contains('\0')
        {
            return Err(StoreError::InvalidSlug(slug.to_string()));
        }
        Ok(self.blogs_dir.join(format!("{slug}.json")))
    }
}

/// Check if a file is a JSON record file
fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "json")
        .unwrap_or(false)
}
