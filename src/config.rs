//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV_VAR, DEFAULT_STORE_FILE};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a mode name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{other}' (expected auto, dark or light)"),
        }
    }
}

/// Where the book collection is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Path of the JSON book file (defaults to `books_data.json` in the working directory)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by `LAZYBOOKS_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyBooks/config.toml`
/// - macOS: `~/Library/Application Support/LazyBooks/config.toml`
/// - Windows: `%APPDATA%\LazyBooks\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Book file location
    #[serde(default)]
    pub store: StoreConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging preferences
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `LAZYBOOKS_CONFIG_DIR` replaces the whole directory when set.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV_VAR).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory for log files.
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - store path (if set) is not empty and does not point at a directory
    /// - logging level is not empty
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.store.path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Store path must not be empty");
            }
            if path.is_dir() {
                anyhow::bail!("Store path is a directory: {}", path.display());
            }
        }

        if self.logging.level.trim().is_empty() {
            anyhow::bail!("Logging level must not be empty");
        }

        Ok(())
    }

    /// Resolves the book file path.
    ///
    /// Precedence: explicit override, then `[store] path`, then
    /// `books_data.json` in the working directory.
    #[must_use]
    pub fn resolve_store_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.store.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.store.path, None);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_returns_default() -> Result<()> {
        let dir = TempDir::new()?;
        let config = Config::load_from(&dir.path().join("config.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_save_and_load_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");

        let mut config = Config::new();
        config.store.path = Some(dir.path().join("books.json"));
        config.ui.theme_mode = ThemeMode::Light;
        config.logging.level = "debug".to_string();

        config.save_to(&path)?;
        let loaded = Config::load_from(&path)?;

        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme_mode = \"Dark\"\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(config.store.path, None);
        assert_eq!(config.logging.level, "info");
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_store_path_directory_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let mut config = Config::new();
        config.store.path = Some(dir.path().to_path_buf());
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_resolve_store_path_precedence() {
        let mut config = Config::new();
        assert_eq!(
            config.resolve_store_path(None),
            PathBuf::from(DEFAULT_STORE_FILE)
        );

        config.store.path = Some(PathBuf::from("/data/books.json"));
        assert_eq!(
            config.resolve_store_path(None),
            PathBuf::from("/data/books.json")
        );

        assert_eq!(
            config.resolve_store_path(Some(Path::new("other.json"))),
            PathBuf::from("other.json")
        );
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("LIGHT").unwrap(), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("dark").unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("Auto").unwrap(), ThemeMode::Auto);
        assert!(ThemeMode::parse("sepia").is_err());
    }
}
