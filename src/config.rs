//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV, LIBRARY_FILE_NAME};

/// Theme display mode preference for the terminal UI.
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

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => anyhow::bail!("Invalid theme mode. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// Theme library location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LibraryConfig {
    /// Library file path; defaults to `saved_themes.json` in the config directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl LibraryConfig {
    /// Resolves the library file path.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join(LIBRARY_FILE_NAME)),
        }
    }
}

/// Prompt-to-theme generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the generative-language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Sampling temperature (0.0-2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeneratorConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// Empty values count as missing.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Start the TUI with a random palette instead of the default one
    #[serde(default = "default_start_with_random")]
    pub start_with_random: bool,
}

fn default_start_with_random() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            start_with_random: default_start_with_random(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/HueGrid/config.toml`
/// - macOS: `~/Library/Application Support/HueGrid/config.toml`
/// - Windows: `%APPDATA%\HueGrid\config.toml`
///
/// `HUEGRID_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Theme library settings
    #[serde(default)]
    pub library: LibraryConfig,
    /// Prompt generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$HUEGRID_CONFIG_DIR` when set
    /// - Linux: `~/.config/HueGrid/`
    /// - macOS: `~/Library/Application Support/HueGrid/`
    /// - Windows: `%APPDATA%\HueGrid\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `generator.endpoint` is an http(s) URL
    /// - `generator.model` and `generator.api_key_env` are not empty
    /// - `generator.temperature` is within 0.0-2.0
    /// - `generator.timeout_secs` is positive
    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;

        if !(generator.endpoint.starts_with("http://") || generator.endpoint.starts_with("https://"))
        {
            anyhow::bail!(
                "Generator endpoint must start with http:// or https://: {}",
                generator.endpoint
            );
        }

        if generator.model.trim().is_empty() {
            anyhow::bail!("Generator model cannot be empty");
        }

        if generator.api_key_env.trim().is_empty() {
            anyhow::bail!("Generator API key variable name cannot be empty");
        }

        if !(0.0..=2.0).contains(&generator.temperature) {
            anyhow::bail!(
                "Generator temperature must be between 0.0 and 2.0, got {}",
                generator.temperature
            );
        }

        if generator.timeout_secs == 0 {
            anyhow::bail!("Generator timeout must be at least 1 second");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.library.path, None);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.ui.start_with_random);
        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert!((config.generator.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_generator() {
        let mut config = Config::new();
        config.generator.temperature = 2.5;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generator.model = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generator.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generator.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.library.path = Some(temp_dir.path().join("themes.json"));

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let loaded: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
        assert!(loaded.ui.start_with_random);
        assert_eq!(loaded.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_library_path_resolution() {
        let library = LibraryConfig {
            path: Some(PathBuf::from("/tmp/themes.json")),
        };
        assert_eq!(library.resolved_path().unwrap(), PathBuf::from("/tmp/themes.json"));

        let default_path = LibraryConfig::default().resolved_path().unwrap();
        assert!(default_path.ends_with(LIBRARY_FILE_NAME));
    }

    #[test]
    fn test_theme_mode_parsing() {
        assert_eq!("auto".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
        assert_eq!("LIGHT".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }
}
