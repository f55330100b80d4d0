use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::PollConfig;
use crate::host::HostData;
use crate::poll::error::PollError;
use crate::poll::token::CancellationToken;

/// Issues the single idempotent `GET` against the status endpoint.
pub struct StatusClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl StatusClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PollError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PollError::ClientBuild)?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &PollConfig) -> Result<Self, PollError> {
        Self::new(config.status_url(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and decodes one payload, giving up as soon as `token` is cancelled.
    pub async fn fetch(&self, token: &CancellationToken) -> Result<HostData, PollError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(PollError::Aborted),
            result = self.do_fetch() => result,
        }
    }

    async fn do_fetch(&self) -> Result<HostData, PollError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(|e| PollError::Parse {
            url: self.url.clone(),
            source: e,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> PollError {
        if err.is_timeout() {
            PollError::Timeout {
                url: self.url.clone(),
                duration: self.timeout,
            }
        } else {
            PollError::Network {
                url: self.url.clone(),
                source: err,
            }
        }
    }
}
