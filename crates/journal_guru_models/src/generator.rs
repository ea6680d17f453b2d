//! Provider capability used by the relay.

use async_trait::async_trait;
use journal_guru_error::ModelsResult;

/// Anything that turns a rendered instruction into generated text.
///
/// Implementations return the provider's first text artifact unmodified, or
/// an error when the call fails or yields no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for a single user-role instruction.
    async fn generate_text(
        &self,
        instruction: &str,
        model: &str,
        max_tokens: u32,
    ) -> ModelsResult<String>;

    /// Provider name for logs.
    fn provider_name(&self) -> &'static str;
}
