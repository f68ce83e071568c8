//! HTTP client for the Suggestion Service.
//!
//! One `POST {base_url}/receive-ai-suggestion` per call, no retries. The base
//! URL comes from [`Config`](crate::config::Config).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::{Suggestion, SuggestionRequest, SuggestionResponse, SuggestionService};
use crate::config::Config;

/// Default base URL for a locally running Suggestion Service.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";

/// Path of the suggestion endpoint, relative to the base URL.
pub const SUGGESTION_PATH: &str = "/receive-ai-suggestion";

/// Suggestion request errors. These stay inside the client: the
/// [`SuggestionService`] impl turns every one of them into a fallback.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Suggestion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed suggestion response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// HTTP client for the Suggestion Service.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    base_url: String,
    client: Client,
}

impl SuggestionClient {
    /// Create a client without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            client: Client::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: normalize(base_url.into()),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::with_timeout(&config.suggestion_url, config.request_timeout())
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SUGGESTION_PATH)
    }

    /// Ask the service for a suggestion, surfacing every failure.
    pub async fn fetch(&self, goal: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&SuggestionRequest {
                goal: goal.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }

        let parsed: SuggestionResponse = serde_json::from_str(&body)?;
        Ok(parsed.message)
    }
}

impl SuggestionService for SuggestionClient {
    async fn suggest(&self, goal: &str) -> Suggestion {
        match self.fetch(goal).await {
            Ok(message) => {
                tracing::debug!("Received suggestion ({} bytes)", message.len());
                Suggestion::Generated(message)
            }
            Err(e) => {
                tracing::warn!("Suggestion request failed, using fallback: {}", e);
                Suggestion::Fallback
            }
        }
    }
}

/// Strip trailing slashes so the endpoint path joins cleanly.
fn normalize(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}
