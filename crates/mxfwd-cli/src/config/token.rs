//! API token persistence, the sibling store to the options record.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Persisted bearer token for the forwarder proxy.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiTokenConfig {
    /// Bearer token value.
    #[serde(default)]
    pub token: String,
}

impl ApiTokenConfig {
    /// Loads the token file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not
    /// valid TOML. A missing file carries a hint to run `token set`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!(
                "no API token stored at {} (run `mxfwd token set` first)",
                path.display()
            );
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves the token file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize token to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Returns a display form that never exposes the full secret.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.token.chars().count() <= 4 {
            return String::from("****");
        }
        let visible: String = self.token.chars().take(4).collect();
        format!("{visible}****")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_load_missing_hints_token_set() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mxroute_api_token.toml");

        // Act
        let result = ApiTokenConfig::load(&path);

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("token set"));
    }

    #[test]
    fn test_save_and_load() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mxroute_api_token.toml");
        let config = ApiTokenConfig {
            token: String::from("secret-value-1234"),
        };

        // Act
        config.save(&path).unwrap();
        let loaded = ApiTokenConfig::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_masked_hides_secret() {
        // Arrange
        let config = ApiTokenConfig {
            token: String::from("secret-value-1234"),
        };

        // Act
        let masked = config.masked();

        // Assert
        assert_eq!(masked, "secr****");
        assert!(!masked.contains("1234"));
    }

    #[test]
    fn test_masked_short_token() {
        // Arrange
        let config = ApiTokenConfig {
            token: String::from("abc"),
        };

        // Act & Assert
        assert_eq!(config.masked(), "****");
    }
}
