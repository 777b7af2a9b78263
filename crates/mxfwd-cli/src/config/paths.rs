//! Config directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name of the persisted options record.
pub const OPTIONS_CONFIG_FILE: &str = "mxroute_options_config.toml";

/// File name of the persisted API token.
pub const API_TOKEN_FILE: &str = "mxroute_api_token.toml";

/// Resolves the directory holding the persisted records.
///
/// - If `dir` is `Some`, returns it unchanged.
/// - Otherwise returns `~/.config/mxfwd`.
fn resolve_store_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.clone());
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home).join(".config").join("mxfwd"))
}

/// Resolves the options record path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_options_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_store_dir(dir)?.join(OPTIONS_CONFIG_FILE))
}

/// Resolves the API token path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_token_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_store_dir(dir)?.join(API_TOKEN_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_options_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/myproject");

        // Act
        let path = resolve_options_path(Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/myproject/mxroute_options_config.toml"));
    }

    #[test]
    fn test_resolve_token_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/myproject");

        // Act
        let path = resolve_token_path(Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/myproject/mxroute_api_token.toml"));
    }

    #[test]
    fn test_resolve_default() {
        // Arrange & Act
        let path = resolve_options_path(None).unwrap();

        // Assert
        assert!(path.ends_with(".config/mxfwd/mxroute_options_config.toml"));
    }
}
