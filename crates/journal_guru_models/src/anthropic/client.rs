//! HTTP client for the Anthropic Messages API.

use super::types::{AnthropicConfig, AnthropicRequest, AnthropicResponse};
use crate::TextGenerator;
use async_trait::async_trait;
use journal_guru_error::{ModelsError, ModelsErrorKind, ModelsResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default Anthropic API base URL.
pub const DEFAULT_ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com";

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic HTTP client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Creates a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(endpoint = %config.endpoint()))]
    pub fn new(config: AnthropicConfig) -> ModelsResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::ClientCreation(e.to_string())))?;

        debug!(timeout = ?config.timeout(), "Created Anthropic client");
        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.endpoint().trim_end_matches('/'))
    }

    /// Sends a request and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// undecodable body.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send(&self, request: &AnthropicRequest) -> ModelsResult<AnthropicResponse> {
        debug!(
            max_tokens = request.max_tokens(),
            message_count = request.messages().len(),
            "Sending Anthropic request"
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Anthropic request failed");
                if e.is_timeout() {
                    ModelsError::new(ModelsErrorKind::Timeout(e.to_string()))
                } else {
                    ModelsError::new(ModelsErrorKind::Http(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Anthropic API error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Anthropic response body");
            if e.is_timeout() {
                ModelsError::new(ModelsErrorKind::Timeout(e.to_string()))
            } else {
                ModelsError::new(ModelsErrorKind::Http(e.to_string()))
            }
        })?;

        let decoded: AnthropicResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Anthropic response");
            ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(
            id = %decoded.id(),
            content_items = decoded.content().len(),
            stop_reason = ?decoded.stop_reason(),
            "Received Anthropic response"
        );
        Ok(decoded)
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    #[instrument(skip(self, instruction), fields(model = %model, instruction_len = instruction.len()))]
    async fn generate_text(
        &self,
        instruction: &str,
        model: &str,
        max_tokens: u32,
    ) -> ModelsResult<String> {
        let request = AnthropicRequest::single_user_message(model, max_tokens, instruction);
        let response = self.send(&request).await?;

        response
            .first_text()
            .map(str::to_owned)
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
