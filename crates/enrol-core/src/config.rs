//! Configuration management for enrol.
//!
//! Loads configuration from `${ENROL_HOME}/config.toml` with sensible
//! defaults when the file is absent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::PLACEHOLDER_TOKEN;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token placeholder issued into the session record on registration.
    ///
    /// This is a development stub, not a credential. Real token issuance is
    /// out of scope for this application.
    pub token: String,

    /// Render password fields masked.
    pub mask_secrets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: PLACEHOLDER_TOKEN.to_string(),
            mask_secrets: true,
        }
    }
}

impl Config {
    /// Loads configuration from the default path, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Writes the default config template to the default path if no config
    /// file exists yet. Returns the path either way.
    pub fn init() -> Result<PathBuf> {
        let path = paths::config_path();
        Self::write_template(&path)?;
        Ok(path)
    }

    /// Writes the embedded template to `path` unless it already exists.
    pub fn write_template(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(path, default_config_template()).context("Failed to write config file")?;
        Ok(())
    }
}

pub mod paths {
    //! Path resolution for enrol configuration and data directories.
    //!
    //! ENROL_HOME resolution order:
    //! 1. ENROL_HOME environment variable (if set)
    //! 2. ~/.config/enrol (default)

    use std::path::PathBuf;

    /// Returns the enrol home directory.
    ///
    /// Checks ENROL_HOME env var first, falls back to ~/.config/enrol
    pub fn enrol_home() -> PathBuf {
        if let Ok(home) = std::env::var("ENROL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("enrol"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        enrol_home().join("config.toml")
    }

    /// Returns the path to the key-value store directory.
    pub fn store_dir() -> PathBuf {
        enrol_home().join("store")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        enrol_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.token, "sample-token");
        assert!(config.mask_secrets);
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.token, "sample-token");
    }

    #[test]
    fn test_load_from_parses_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "token = \"dev-token\"\nmask_secrets = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.token, "dev-token");
        assert!(!config.mask_secrets);
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "token = ").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_write_template_creates_parseable_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        Config::write_template(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.token, "sample-token");
    }

    #[test]
    fn test_write_template_does_not_clobber_existing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "token = \"kept\"\n").unwrap();

        Config::write_template(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.token, "kept");
    }
}
