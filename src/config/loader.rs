use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Longest countdown the popup accepts, in seconds.
pub const MAX_COUNTDOWN_SECONDS: u32 = 600;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/vidsettings/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vidsettings").join("config.toml")
    }

    /// Default log file location under the platform cache directory.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("vidsettings").join("vidsettings.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The countdown does not exceed [`MAX_COUNTDOWN_SECONDS`]
    /// - Every listed mode has non-zero dimensions and refresh rate
    /// - The starting mode has non-zero dimensions
    ///
    /// An empty mode list is allowed; the panel then disables resolution selection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.popup.countdown_seconds > MAX_COUNTDOWN_SECONDS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "countdown_seconds must be at most {}, got {}",
                    MAX_COUNTDOWN_SECONDS, self.popup.countdown_seconds
                ),
            });
        }

        let current = &self.display.current;
        if current.width == 0 || current.height == 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Current display size must be non-zero, got {} x {}",
                    current.width, current.height
                ),
            });
        }

        let mut listed = self.display.modes.iter().chain(&self.display.unsupported);
        if let Some(bad) = listed.find(|m| m.width == 0 || m.height == 0 || m.refresh_rate_hz == 0)
        {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid display mode '{}'", bad),
            });
        }

        Ok(())
    }
}
