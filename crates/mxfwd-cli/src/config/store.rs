//! `OptionsConfig` record and TOML read/write through `OptionsStore`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default alias template.
pub const DEFAULT_TEMPLATE: &str = "<slug>";

/// Default slug word count, kept as text.
pub const DEFAULT_SLUG_LENGTH: &str = "2";

/// Default hex character count, kept as text.
pub const DEFAULT_HEX_LENGTH: &str = "6";

/// Default separator between alias components.
pub const DEFAULT_ALIAS_SEPARATOR: &str = "_";

/// Default separator within the slug.
pub const DEFAULT_SLUG_SEPARATOR: &str = "_";

fn default_template() -> String {
    String::from(DEFAULT_TEMPLATE)
}

fn default_slug_length() -> String {
    String::from(DEFAULT_SLUG_LENGTH)
}

fn default_hex_length() -> String {
    String::from(DEFAULT_HEX_LENGTH)
}

fn default_separator() -> String {
    String::from(DEFAULT_ALIAS_SEPARATOR)
}

/// Alias-generation options record.
///
/// Every field is opaque text; the length fields are numeric *text* and
/// any numeric interpretation belongs to the downstream consumer of the
/// options string. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionsConfig {
    /// Domain the aliases are created under.
    #[serde(default)]
    pub domain: String,
    /// Destination address the aliases forward to.
    #[serde(default)]
    pub destination: String,
    /// Alias template; recognized placeholders are `<slug>` and `<hex>`.
    #[serde(default = "default_template")]
    pub template: String,
    /// Literal text prepended to the alias.
    #[serde(default)]
    pub prefix: String,
    /// Literal text appended to the alias.
    #[serde(default)]
    pub suffix: String,
    /// Number of slug words.
    #[serde(default = "default_slug_length")]
    pub slug_length: String,
    /// Number of hex characters.
    #[serde(default = "default_hex_length")]
    pub hex_length: String,
    /// Separator between alias components.
    #[serde(default = "default_separator")]
    pub alias_separator: String,
    /// Separator within the slug.
    #[serde(default = "default_separator")]
    pub slug_separator: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            destination: String::new(),
            template: default_template(),
            prefix: String::new(),
            suffix: String::new(),
            slug_length: default_slug_length(),
            hex_length: default_hex_length(),
            alias_separator: default_separator(),
            slug_separator: default_separator(),
        }
    }
}

/// TOML-backed store for the options record at an injected path.
///
/// Tests inject a temporary path instead of the real config directory.
#[derive(Debug)]
pub struct OptionsStore {
    /// Path of the persisted record.
    path: PathBuf,
}

impl OptionsStore {
    /// Creates a store for the given path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the persisted record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the options record.
    ///
    /// A missing, unreadable, or unparsable file yields the default
    /// record; corruption is logged at `warn` and never surfaced.
    #[must_use]
    pub fn load(&self) -> OptionsConfig {
        if !self.path.exists() {
            return OptionsConfig::default();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "failed to read stored options, using defaults"
                );
                return OptionsConfig::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(
                path = %self.path.display(),
                %err,
                "stored options are not valid TOML, using defaults"
            );
            OptionsConfig::default()
        })
    }

    /// Saves the options record, creating parent directories if needed.
    /// The prior value is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or the file write fails.
    pub fn save(&self, config: &OptionsConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content =
            toml::to_string_pretty(config).context("failed to serialize options to TOML")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Saves the options record, logging instead of propagating failures.
    ///
    /// Used from the TUI render path, where a full store must not take
    /// the screen down with it.
    pub fn save_guarded(&self, config: &OptionsConfig) {
        if let Err(err) = self.save(config) {
            tracing::warn!(path = %self.path.display(), "failed to persist options: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_record() {
        // Arrange & Act
        let config = OptionsConfig::default();

        // Assert
        assert_eq!(config.domain, "");
        assert_eq!(config.destination, "");
        assert_eq!(config.template, "<slug>");
        assert_eq!(config.slug_length, "2");
        assert_eq!(config.hex_length, "6");
        assert_eq!(config.alias_separator, "_");
        assert_eq!(config.slug_separator, "_");
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        // Arrange
        let config = OptionsConfig {
            domain: String::from("example.com"),
            destination: String::from("inbox@mailbox.org"),
            template: String::from("<slug><hex>"),
            slug_length: String::from("3"),
            ..OptionsConfig::default()
        };

        // Act
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: OptionsConfig = toml::from_str(&toml_str).unwrap();

        // Assert
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let store = OptionsStore::new(PathBuf::from(
            "/tmp/mxfwd_test_nonexistent_options.toml",
        ));

        // Act
        let config = store.load();

        // Assert
        assert_eq!(config, OptionsConfig::default());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mxroute_options_config.toml");
        std::fs::write(&path, "domain = [this is not toml").unwrap();
        let store = OptionsStore::new(path);

        // Act
        let config = store.load();

        // Assert - corruption recovers to defaults, never errors
        assert_eq!(config, OptionsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = OptionsStore::new(dir.path().join("mxroute_options_config.toml"));
        let config = OptionsConfig {
            domain: String::from("example.com"),
            prefix: String::from("shop"),
            hex_length: String::from("8"),
            ..OptionsConfig::default()
        };

        // Act
        store.save(&config).unwrap();
        let loaded = store.load();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = OptionsStore::new(dir.path().join("nested/deeper/options.toml"));

        // Act
        store.save(&OptionsConfig::default()).unwrap();

        // Assert
        assert_eq!(store.load(), OptionsConfig::default());
    }

    #[test]
    fn test_load_partial_record_fills_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mxroute_options_config.toml");
        std::fs::write(&path, "domain = \"example.com\"\n").unwrap();
        let store = OptionsStore::new(path);

        // Act
        let config = store.load();

        // Assert - absent fields come back as defaults
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.template, "<slug>");
        assert_eq!(config.slug_length, "2");
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let store = OptionsStore::new(dir.path().join("mxroute_options_config.toml"));
        let first = OptionsConfig {
            domain: String::from("old.example.com"),
            ..OptionsConfig::default()
        };
        let second = OptionsConfig {
            domain: String::from("new.example.com"),
            ..OptionsConfig::default()
        };

        // Act
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        // Assert - read-after-write observes the latest value
        assert_eq!(store.load().domain, "new.example.com");
    }
}
