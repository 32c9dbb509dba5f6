//! Site configuration (portal.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::i18n::{Locale, DEFAULT_LOCALE};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    /// Default locale code; must be a member of the supported set
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub blogs_dir: String,
    pub locales_dir: String,
    pub public_dir: String,
    /// Holds small bits of persisted state such as the chosen locale
    pub state_dir: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "AES Portal".to_string(),
            description: String::new(),
            author: "AES Staff Writer".to_string(),
            language: "en".to_string(),

            url: "http://localhost:3000".to_string(),

            blogs_dir: "data/blogs".to_string(),
            locales_dir: "locales".to_string(),
            public_dir: "public".to_string(),
            state_dir: ".aes-portal".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The configured default locale, falling back if the code is unknown
    pub fn default_locale(&self) -> Locale {
        match Locale::parse(&self.language) {
            Some(locale) => locale,
            None => {
                tracing::warn!(
                    "Unknown language {:?} in config, using {}",
                    self.language,
                    DEFAULT_LOCALE
                );
                DEFAULT_LOCALE
            }
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "AES Portal");
        assert_eq!(config.blogs_dir, "data/blogs");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.default_locale(), Locale::En);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Alliance Portal
language: fr
blogs_dir: content/blogs
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Alliance Portal");
        assert_eq!(config.default_locale(), Locale::Fr);
        assert_eq!(config.blogs_dir, "content/blogs");
        assert_eq!(config.server.port, 8080);
        // unspecified fields keep their defaults
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let config = SiteConfig {
            language: "zz".to_string(),
            ..Default::default()
        };
        assert_eq!(config.default_locale(), DEFAULT_LOCALE);
    }
}
