use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation endpoint settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Desktop notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// URL of the text-generation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Mirror toasts as desktop notifications
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("tonecraft");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .context("Could not find data directory")?
            .join("tonecraft");
        Ok(dir)
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist. A present-but-unparsable file is an error: silently ignoring
    /// it would mask typos in the endpoint URL.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().context("Config path has no parent")?;

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        fs::create_dir_all(Self::data_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [generation]
            endpoint = "http://localhost:9000/api/generate"
            timeout_secs = 10

            [notifications]
            enabled = false

            [ui]
            theme = "high-contrast"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.generation.endpoint,
            "http://localhost:9000/api/generate"
        );
        assert_eq!(config.generation.timeout_secs, 10);
        assert!(!config.notifications.enabled);
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.generation.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(
            config.generation.timeout_secs,
            DEFAULT_REQUEST_TIMEOUT_SECS
        );
        assert!(config.notifications.enabled);
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let toml = r#"
            [generation]
            endpoint = "http://example.com/generate"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.generation.endpoint, "http://example.com/generate");
        assert_eq!(
            config.generation.timeout_secs,
            DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }
}
