//! Generation provider integrations for Journal Guru.
//!
//! The relay only needs one capability from a provider: turn a rendered
//! instruction into text. [`TextGenerator`] names that capability and
//! [`AnthropicClient`] implements it over the Anthropic Messages API.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod anthropic;
mod generator;

pub use anthropic::{
    ANTHROPIC_VERSION, AnthropicClient, AnthropicConfig, AnthropicConfigBuilder, AnthropicContent,
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage, DEFAULT_ANTHROPIC_ENDPOINT,
};
pub use generator::TextGenerator;
