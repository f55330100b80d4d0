use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/helios/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("helios").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
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

    /// Applies the `PORT` environment override to the server bind address.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        let Some(port) = port else {
            return Ok(());
        };
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::ValidationError {
            message: format!("PORT '{}' is not a valid port number", port),
        })?;
        let mut addr = self.bind_addr()?;
        addr.set_port(port);
        self.server.bind_addr = addr.to_string();
        Ok(())
    }

    /// Parsed server bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_addr
            .parse()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid bind address '{}': {}", self.server.bind_addr, e),
            })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The bind address parses
    /// - The status endpoint and base URL are not empty
    /// - Poll interval and animation periods are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;

        if self.poll.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "poll.base_url must not be empty".to_string(),
            });
        }
        if self.poll.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "poll.endpoint must not be empty".to_string(),
            });
        }

        let periods = [
            ("poll.interval_ms", self.poll.interval_ms),
            ("animation.clear_period_ms", self.animation.clear_period_ms),
            ("animation.write_period_ms", self.animation.write_period_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than zero", name),
                });
            }
        }

        Ok(())
    }
}
