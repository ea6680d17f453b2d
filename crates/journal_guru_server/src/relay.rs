//! The relay operation itself, independent of HTTP.

use journal_guru_core::{GenerationRequest, GenerationResult, render_instruction};
use journal_guru_error::{RelayError, RelayErrorKind};
use journal_guru_models::TextGenerator;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Model identifier sent with every generation call.
pub const MODEL_ID: &str = "claude-sonnet-4-20250514";

/// Output budget sent with every generation call.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Stateless translation of a request into one provider call.
///
/// Holds only the injected generator; concurrent calls share nothing mutable.
#[derive(Clone)]
pub struct RelayService {
    generator: Arc<dyn TextGenerator>,
}

impl RelayService {
    /// Creates a relay around a provider handle.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generates prompts for a request.
    ///
    /// # Errors
    ///
    /// - [`RelayErrorKind::Validation`] when any field is empty; the provider is not called.
    /// - [`RelayErrorKind::Upstream`] when the provider fails or returns no text.
    #[instrument(
        skip(self, request),
        fields(provider = self.generator.provider_name(), num_prompts = %request.num_prompts())
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, RelayError> {
        if !request.is_complete() {
            warn!("Rejecting request with missing fields");
            return Err(RelayError::new(RelayErrorKind::Validation));
        }

        let instruction = render_instruction(request);

        info!(model = MODEL_ID, max_tokens = MAX_OUTPUT_TOKENS, "Calling generation provider");
        let outcome = self
            .generator
            .generate_text(&instruction, MODEL_ID, MAX_OUTPUT_TOKENS)
            .await;

        match outcome {
            Ok(text) => {
                info!(chars = text.len(), "Successfully generated prompts");
                Ok(GenerationResult::new(text))
            }
            Err(e) => {
                error!(error = %e, "Error generating prompts");
                Err(RelayError::from(e))
            }
        }
    }
}

impl std::fmt::Debug for RelayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayService")
            .field("provider", &self.generator.provider_name())
            .finish()
    }
}
