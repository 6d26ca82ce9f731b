use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Google's public reverse-geocoding endpoint.
pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MementoConfig {
    pub logging: LoggingConfig,
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocodingConfig {
    pub endpoint: String,
    pub api_key: String,
    /// Restricts results to one address type; `locality` gives city-level names.
    pub result_type: String,
    pub timeout_secs: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: GOOGLE_GEOCODE_ENDPOINT.into(),
            api_key: String::new(),
            result_type: "locality".into(),
            timeout_secs: 10,
        }
    }
}

/// Returns `~/.memento/`
pub fn default_memento_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".memento")
}

/// Returns the default config file path: `~/.memento/config.toml`
pub fn default_config_path() -> PathBuf {
    default_memento_dir().join("config.toml")
}

impl MementoConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MementoConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// `MEMENTO_GEOCODING_API_KEY` wins over the mobile app's
    /// `EXPO_PUBLIC_GOOGLE_PLACES_API_KEY`, which is still honoured so the same
    /// `.env` file works for both.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("EXPO_PUBLIC_GOOGLE_PLACES_API_KEY") {
            self.geocoding.api_key = val;
        }
        if let Ok(val) = std::env::var("MEMENTO_GEOCODING_API_KEY") {
            self.geocoding.api_key = val;
        }
        if let Ok(val) = std::env::var("MEMENTO_GEOCODING_ENDPOINT") {
            self.geocoding.endpoint = val;
        }
        if let Ok(val) = std::env::var("MEMENTO_LOG_LEVEL") {
            self.logging.log_level = val;
        }
    }
}
