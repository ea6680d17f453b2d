//! Anthropic Messages API request and response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anthropic API request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// List of messages
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }

    /// A request holding one user-role text message.
    pub fn single_user_message(
        model: impl Into<String>,
        max_tokens: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![AnthropicMessage::user(text)],
        }
    }
}

/// Anthropic message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicMessage {
    /// Role of the message sender
    role: String,
    /// Content blocks
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }

    /// User-role message with a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![AnthropicContentBlock::Text { text: text.into() }],
        }
    }
}

/// Content block in an Anthropic request message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text content
    Text {
        /// Text content
        text: String,
    },
}

/// Anthropic API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response ID
    #[serde(default)]
    id: String,
    /// Role (should be "assistant")
    #[serde(default)]
    role: String,
    /// Content items
    #[serde(default)]
    content: Vec<AnthropicContent>,
    /// Model used
    #[serde(default)]
    model: String,
    /// Stop reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Usage information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Text of the first content item, if it carries any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(|c| c.text.as_deref())
    }
}

/// Content item in an Anthropic response.
///
/// Non-text items (tool use, thinking) have no `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicContent {
    /// Content type
    #[serde(rename = "type")]
    content_type: String,
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Usage information from Anthropic API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens
    input_tokens: u32,
    /// Output tokens
    output_tokens: u32,
}

/// Anthropic API connection settings.
#[derive(Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicConfig {
    /// API key sent as `x-api-key`
    api_key: String,
    /// Base URL, without the `/v1/messages` path
    #[builder(default = "crate::DEFAULT_ANTHROPIC_ENDPOINT.to_string()")]
    endpoint: String,
    /// Whole-request timeout; transport default when unset
    #[builder(default)]
    timeout: Option<Duration>,
}

impl AnthropicConfig {
    /// Creates a builder for AnthropicConfig.
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }
}

impl std::fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_single_user_message() {
        let request = AnthropicRequest::single_user_message("claude-test", 2048, "Hello");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "claude-test");
        assert_eq!(value["max_tokens"], 2048);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"][0]["type"], "text");
        assert_eq!(value["messages"][0]["content"][0]["text"], "Hello");
    }

    #[test]
    fn test_first_text_only_reads_first_item() {
        let response: AnthropicResponse = serde_json::from_str(
            r#"{"id":"msg_1","role":"assistant","model":"m",
                "content":[{"type":"tool_use"},{"type":"text","text":"later"}]}"#,
        )
        .unwrap();

        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = AnthropicConfig::builder()
            .api_key("sk-secret")
            .build()
            .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert_eq!(config.endpoint(), crate::DEFAULT_ANTHROPIC_ENDPOINT);
    }
}
