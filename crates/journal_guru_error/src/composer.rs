//! Client-side composer error types.

/// Failures reported by the prompt composer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ComposerErrorKind {
    /// One of the four selections is empty
    #[display("Please fill out all fields before generating your prompts.")]
    IncompleteForm,
    /// Issue is "Other" but no custom issue was typed
    #[display("Please enter your custom issue in the text field.")]
    MissingCustomIssue,
    /// Lens is "Other" but no custom lens was typed
    #[display("Please enter your custom philosophical lens in the text field.")]
    MissingCustomLens,
    /// The relay could not be reached or answered with a failure
    #[display("Relay request failed: {_0}")]
    Transport(String),
    /// Writing to the system clipboard failed
    #[display("Clipboard error: {_0}")]
    Clipboard(String),
    /// Copy requested before any prompts were generated
    #[display("No generated prompts to copy")]
    NothingToCopy,
}

impl ComposerErrorKind {
    /// Whether this failure was raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ComposerErrorKind::IncompleteForm
                | ComposerErrorKind::MissingCustomIssue
                | ComposerErrorKind::MissingCustomLens
        )
    }
}

/// Composer error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Composer Error: {} at line {} in {}", kind, line, file)]
pub struct ComposerError {
    kind: ComposerErrorKind,
    line: u32,
    file: &'static str,
}

impl ComposerError {
    /// Create a new composer error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ComposerErrorKind {
        &self.kind
    }
}

impl<T> From<T> for ComposerError
where
    T: Into<ComposerErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
