use std::time::Duration;

use thiserror::Error;

/// Failures of one poll. None of them leave the poll loop.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out after {duration:?}")]
    Timeout { url: String, duration: Duration },

    #[error("Status endpoint '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse host data from '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fetch superseded by a newer poll")]
    Aborted,
}

impl PollError {
    /// Short classification used in logs and the client header.
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::ClientBuild(_) => "client_error",
            PollError::Network { .. } | PollError::Timeout { .. } | PollError::Status { .. } => {
                "network_failure"
            }
            PollError::Parse { .. } => "parse_failure",
            PollError::Aborted => "aborted",
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, PollError::Aborted)
    }
}
