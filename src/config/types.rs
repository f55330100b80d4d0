use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Status server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the status server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// How long a host snapshot is reused before probing again (default: 15).
    #[serde(default = "default_snapshot_max_age")]
    pub snapshot_max_age_seconds: u64,
}

/// Status client polling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Base URL of the status server (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Relative path of the status endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Delay between two polls in milliseconds (default: 20000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

/// Typewriter timings for the console overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Period between two removed characters (default: 75).
    #[serde(default = "default_clear_period_ms")]
    pub clear_period_ms: u64,
    /// Period between two appended characters (default: 50).
    #[serde(default = "default_write_period_ms")]
    pub write_period_ms: u64,
    /// Head start added after a clear before writing begins (default: 500).
    #[serde(default = "default_start_delay_ms")]
    pub start_delay_ms: u64,
}

/// Host panel presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Name shown before the `@host` header.
    #[serde(default = "default_user")]
    pub user: String,
    /// Text shown in the console when the client starts.
    #[serde(default)]
    pub greeting: Option<String>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:7889".to_string()
}

fn default_snapshot_max_age() -> u64 {
    15
}

fn default_base_url() -> String {
    "http://127.0.0.1:7889".to_string()
}

fn default_endpoint() -> String {
    "/s".to_string()
}

fn default_interval_ms() -> u64 {
    20_000
}

fn default_request_timeout() -> u64 {
    10
}

fn default_clear_period_ms() -> u64 {
    75
}

fn default_write_period_ms() -> u64 {
    50
}

fn default_start_delay_ms() -> u64 {
    500
}

fn default_user() -> String {
    "helios".to_string()
}

impl PollConfig {
    /// Full URL of the status endpoint.
    pub fn status_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            snapshot_max_age_seconds: default_snapshot_max_age(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            interval_ms: default_interval_ms(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            clear_period_ms: default_clear_period_ms(),
            write_period_ms: default_write_period_ms(),
            start_delay_ms: default_start_delay_ms(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            greeting: None,
        }
    }
}
