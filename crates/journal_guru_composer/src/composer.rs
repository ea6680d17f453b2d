//! The generate / copy / reset actions.

use crate::{ClipboardWriter, ComposerView, FormState, RelayTransport};
use journal_guru_core::{GenerationRequest, GenerationResult};
use journal_guru_error::{ComposerError, ComposerErrorKind};
use tracing::{info, instrument, warn};

/// Form, last outcome and the transport used to reach the relay.
pub struct Composer<T> {
    form: FormState,
    view: ComposerView,
    transport: T,
}

impl<T: RelayTransport> Composer<T> {
    /// Creates an empty composer.
    pub fn new(transport: T) -> Self {
        Self {
            form: FormState::default(),
            view: ComposerView::default(),
            transport,
        }
    }

    /// Current form.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current outcome.
    pub fn view(&self) -> &ComposerView {
        &self.view
    }

    /// Replaces the form wholesale.
    pub fn set_form(&mut self, form: FormState) {
        self.form = form;
    }

    /// Replaces the form with an edited copy of itself.
    pub fn update_form(&mut self, edit: impl FnOnce(FormState) -> FormState) {
        let current = std::mem::take(&mut self.form);
        self.form = edit(current);
    }

    /// Validates, then sends exactly one request to the relay.
    ///
    /// A validation failure returns before any network call and leaves the
    /// view as it was. Otherwise the view is cleared, then holds either the
    /// prompts verbatim or the generic failure message.
    #[instrument(skip(self))]
    pub async fn generate(&mut self) -> Result<&str, ComposerError> {
        let request = self.submit()?;
        let outcome = self.transport.request_prompts(&request).await;
        self.complete(outcome)
    }

    /// First half of [`generate`](Self::generate): validates and marks the view in flight.
    ///
    /// For callers that drive the transport themselves and render the
    /// loading state in between.
    pub fn submit(&mut self) -> Result<GenerationRequest, ComposerError> {
        let request = self.form.resolve()?;
        self.view = ComposerView::in_flight();
        Ok(request)
    }

    /// Second half of [`generate`](Self::generate): records the relay outcome.
    pub fn complete(
        &mut self,
        outcome: Result<GenerationResult, ComposerError>,
    ) -> Result<&str, ComposerError> {
        match outcome {
            Ok(result) => {
                info!("Prompts generated");
                self.view = ComposerView::with_prompts(result.into_prompts());
                Ok(self.view.prompts().as_deref().unwrap_or_default())
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                self.view = ComposerView::failed();
                Err(e)
            }
        }
    }

    /// Copies the current prompts to a clipboard and flags the view as copied.
    ///
    /// Repeated calls write the same text.
    pub fn copy_result(
        &mut self,
        clipboard: &mut impl ClipboardWriter,
    ) -> Result<(), ComposerError> {
        match self.view.prompts() {
            Some(prompts) => {
                clipboard.write_text(prompts)?;
                self.view.mark_copied();
                Ok(())
            }
            None => Err(ComposerError::new(ComposerErrorKind::NothingToCopy)),
        }
    }

    /// Clears the form and any prior outcome.
    pub fn reset(&mut self) {
        self.form = FormState::default();
        self.view = ComposerView::default();
    }
}
