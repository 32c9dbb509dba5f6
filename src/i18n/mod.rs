//! Locale tables and translation lookup
//!
//! Each supported locale has one `<code>.json` file of nested string tables.
//! Lookups take a dotted path (`"hero.title"`); a miss at any step echoes the
//! path back, so a missing translation shows up literally on the page instead
//! of crashing rendering.
//!
//! The current locale is process-wide state: the last explicit choice is
//! persisted to a small state file and restored on startup. Until `restore`
//! has run, callers observe the default locale.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported locales (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
}

/// Locale used before any preference is known
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Parse a locale code, rejecting anything outside the closed set
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the persisted preference has been consulted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalePhase {
    /// Startup state: persisted preference not read yet, default applies
    Pending,
    /// A locale is in effect (restored or explicitly set)
    Ready(Locale),
}

/// Translation handler with process-wide current-locale state
#[derive(Debug)]
pub struct I18n {
    /// Locale in effect when no preference is known
    default: Locale,
    phase: LocalePhase,
    /// Locale -> nested table of translated strings
    translations: HashMap<Locale, serde_json::Value>,
    /// File holding the persisted locale code
    state_path: PathBuf,
}

impl I18n {
    pub fn new<P: AsRef<Path>>(default: Locale, state_path: P) -> Self {
        Self {
            default,
            phase: LocalePhase::Pending,
            translations: HashMap::new(),
            state_path: state_path.as_ref().to_path_buf(),
        }
    }

    /// Load locale tables from a directory of `<code>.json` files.
    ///
    /// Files whose stem is not a known locale code, and files that fail to
    /// parse, are skipped with a log line.
    pub fn load_locales<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let Some(locale) = Locale::parse(stem) else {
                tracing::debug!("Ignoring non-locale file {:?}", path);
                continue;
            };

            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(table) => {
                    self.translations.insert(locale, table);
                    tracing::debug!("Loaded locale table {:?}", path);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse locale file {:?}: {e}", path);
                }
            }
        }

        Ok(())
    }

    /// The locale currently in effect
    pub fn locale(&self) -> Locale {
        match self.phase {
            LocalePhase::Pending => self.default,
            LocalePhase::Ready(locale) => locale,
        }
    }

    /// Adopt the persisted locale preference, if any.
    ///
    /// An absent state file or an unrecognized code leaves the default in
    /// effect; either way the pending phase ends here.
    pub fn restore(&mut self) {
        let restored = match fs::read_to_string(&self.state_path) {
            Ok(raw) => {
                let code = raw.trim();
                match Locale::parse(code) {
                    Some(locale) => Some(locale),
                    None => {
                        tracing::warn!("Ignoring persisted locale {code:?}: unknown code");
                        None
                    }
                }
            }
            Err(_) => None,
        };

        self.phase = LocalePhase::Ready(restored.unwrap_or(self.default));
    }

    /// Switch the current locale and persist the choice
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.phase = LocalePhase::Ready(locale);

        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.state_path, locale.as_str())?;
        Ok(())
    }

    /// Resolve a dotted path against the current locale's table.
    ///
    /// Returns the translated string, or the path itself if any segment is
    /// missing or the value at the end is not a string.
    pub fn resolve(&self, path: &str) -> String {
        self.resolve_for(self.locale(), path)
    }

    /// Resolve a dotted path for a specific locale
    pub fn resolve_for(&self, locale: Locale, path: &str) -> String {
        let Some(table) = self.translations.get(&locale) else {
            return path.to_string();
        };

        let mut current = table;
        for segment in path.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => return path.to_string(),
            }
        }

        match current.as_str() {
            Some(s) => s.to_string(),
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn i18n_with_tables(state_path: &Path) -> I18n {
        let mut i18n = I18n::new(DEFAULT_LOCALE, state_path);
        i18n.translations.insert(
            Locale::En,
            serde_json::json!({"a": {"b": "Hello"}, "nav": {"home": "Home"}}),
        );
        i18n.translations
            .insert(Locale::Fr, serde_json::json!({"a": {"b": "Bonjour"}}));
        i18n
    }

    #[test]
    fn test_resolve_nested_path() {
        let tmp = TempDir::new().unwrap();
        let i18n = i18n_with_tables(&tmp.path().join("locale"));
        assert_eq!(i18n.resolve("a.b"), "Hello");
        assert_eq!(i18n.resolve("nav.home"), "Home");
    }

    #[test]
    fn test_missing_path_echoes_input() {
        let tmp = TempDir::new().unwrap();
        let i18n = i18n_with_tables(&tmp.path().join("locale"));
        assert_eq!(i18n.resolve("missing.path"), "missing.path");
        // walking through a leaf is also a miss
        assert_eq!(i18n.resolve("a.b.c"), "a.b.c");
        // a non-string value at the end is a miss too
        assert_eq!(i18n.resolve("a"), "a");
    }

    #[test]
    fn test_set_locale_switches_resolution() {
        let tmp = TempDir::new().unwrap();
        let mut i18n = i18n_with_tables(&tmp.path().join("locale"));
        assert_eq!(i18n.resolve("a.b"), "Hello");

        i18n.set_locale(Locale::Fr).unwrap();
        assert_eq!(i18n.resolve("a.b"), "Bonjour");
    }

    #[test]
    fn test_pending_phase_uses_default() {
        let tmp = TempDir::new().unwrap();
        let i18n = i18n_with_tables(&tmp.path().join("locale"));
        assert_eq!(i18n.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_locale_persists_across_sessions() {
        let tmp = TempDir::new().unwrap();
        let state_path = tmp.path().join("state").join("locale");

        let mut first = i18n_with_tables(&state_path);
        first.set_locale(Locale::Fr).unwrap();

        let mut second = i18n_with_tables(&state_path);
        second.restore();
        assert_eq!(second.locale(), Locale::Fr);
        assert_eq!(second.resolve("a.b"), "Bonjour");
    }

    #[test]
    fn test_invalid_persisted_locale_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let state_path = tmp.path().join("locale");
        fs::write(&state_path, "zz").unwrap();

        let mut i18n = i18n_with_tables(&state_path);
        i18n.restore();
        assert_eq!(i18n.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_load_locales_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("en.json"),
            r#"{"hero": {"title": "The Alliance"}}"#,
        )
        .unwrap();
        fs::write(
            tmp.path().join("fr.json"),
            r#"{"hero": {"title": "L'Alliance"}}"#,
        )
        .unwrap();
        // unknown code and non-JSON files are both skipped
        fs::write(tmp.path().join("zz.json"), r#"{"k": "v"}"#).unwrap();
        fs::write(tmp.path().join("fr.json.bak"), "{").unwrap();

        let mut i18n = I18n::new(DEFAULT_LOCALE, tmp.path().join("locale"));
        i18n.load_locales(tmp.path()).unwrap();

        assert_eq!(i18n.resolve("hero.title"), "The Alliance");
        i18n.set_locale(Locale::Fr).unwrap();
        assert_eq!(i18n.resolve("hero.title"), "L'Alliance");
    }

    #[test]
    fn test_locale_parse_guard() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("de"), None);
    }
}
