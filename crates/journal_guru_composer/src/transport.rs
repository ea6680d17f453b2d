//! Outbound call from the composer to the relay.

use async_trait::async_trait;
use journal_guru_core::{GenerationRequest, GenerationResult};
use journal_guru_error::{ComposerError, ComposerErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Relay base URL used when none is configured.
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3001";

/// Sends one generation request to the relay.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Posts the request and decodes a successful answer.
    ///
    /// Any failure, network or HTTP, is reported as `Transport`.
    async fn request_prompts(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ComposerError>;
}

/// reqwest-backed transport talking JSON to `/api/generate-prompts`.
#[derive(Debug, Clone)]
pub struct HttpRelayTransport {
    client: Client,
    base_url: String,
}

impl HttpRelayTransport {
    /// Creates a transport for a relay base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/api/generate-prompts",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for HttpRelayTransport {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL)
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint()))]
    async fn request_prompts(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ComposerError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Relay unreachable");
                ComposerError::new(ComposerErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Relay returned an error");
            return Err(ComposerError::new(ComposerErrorKind::Transport(format!(
                "HTTP {}",
                status.as_u16()
            ))));
        }

        let result: GenerationResult = response.json().await.map_err(|e| {
            error!(error = ?e, "Unreadable relay response");
            ComposerError::new(ComposerErrorKind::Transport(e.to_string()))
        })?;

        debug!(chars = result.prompts().len(), "Received prompts from relay");
        Ok(result)
    }
}
