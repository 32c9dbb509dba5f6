//! aes-portal: content service for the AES portal site
//!
//! This crate provides the non-presentation core of the portal: a read-only
//! store over AI-authored blog posts persisted as flat JSON files, a locale
//! resolver with a persisted current-locale preference, and a small API
//! server that exposes the published listing alongside the exported site.

pub mod commands;
pub mod config;
pub mod content;
pub mod i18n;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main portal application
#[derive(Clone)]
pub struct Portal {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory of blog record files
    pub blogs_dir: std::path::PathBuf,
    /// Directory of locale tables
    pub locales_dir: std::path::PathBuf,
    /// Static assets served next to the API
    pub public_dir: std::path::PathBuf,
    /// Persisted state (current locale)
    pub state_dir: std::path::PathBuf,
}

impl Portal {
    /// Create a new portal instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("portal.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let blogs_dir = base_dir.join(&config.blogs_dir);
        let locales_dir = base_dir.join(&config.locales_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let state_dir = base_dir.join(&config.state_dir);

        Ok(Self {
            config,
            base_dir,
            blogs_dir,
            locales_dir,
            public_dir,
            state_dir,
        })
    }

    /// A content store over this portal's blogs directory
    pub fn store(&self) -> content::ContentStore {
        content::ContentStore::new(&self.blogs_dir)
    }

    /// Load locale tables and restore the persisted locale preference
    pub fn i18n(&self) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::new(
            self.config.default_locale(),
            self.state_dir.join("locale"),
        );
        i18n.load_locales(&self.locales_dir)?;
        i18n.restore();
        Ok(i18n)
    }
}
