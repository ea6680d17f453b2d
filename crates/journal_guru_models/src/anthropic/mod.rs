mod client;
mod types;

pub use client::{ANTHROPIC_VERSION, AnthropicClient, DEFAULT_ANTHROPIC_ENDPOINT};
pub use types::{
    AnthropicConfig, AnthropicConfigBuilder, AnthropicContent, AnthropicContentBlock,
    AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder,
    AnthropicResponse, AnthropicUsage,
};
