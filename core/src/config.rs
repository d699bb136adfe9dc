use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.api.base_url.is_empty() {
            errors.push("base_url must not be empty".to_string());
        }

        if self.api.catalog_page_size == 0 {
            errors.push("catalog_page_size must be at least 1".to_string());
        }

        if self.api.locale.is_empty() {
            errors.push("locale must not be empty".to_string());
        }

        if self.search.min_query_len == 0 {
            errors.push("min_query_len must be at least 1".to_string());
        }

        errors
    }
}

/// Remote catalog API settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Single-page catalog request size; must cover the whole catalog.
    #[serde(default = "default_catalog_page_size")]
    pub catalog_page_size: u32,
    /// Language tag selecting localized names and descriptions.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Shown when no description exists for the configured locale.
    #[serde(default = "default_missing_description")]
    pub missing_description: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_page_size: default_catalog_page_size(),
            locale: default_locale(),
            missing_description: default_missing_description(),
        }
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_catalog_page_size() -> u32 {
    2000
}

fn default_locale() -> String {
    "es".to_string()
}

fn default_missing_description() -> String {
    "No description available.".to_string()
}

/// Search behavior settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Queries shorter than this settle immediately with no results.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Trailing-edge keystroke debounce before a search is triggered.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_min_query_len() -> usize {
    2
}

fn default_debounce_ms() -> u64 {
    250
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
