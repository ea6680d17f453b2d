//! Relay endpoint error types.

use crate::ModelsError;

/// Failure conditions of a single relay call.
#[derive(Debug, Clone, derive_more::Display)]
pub enum RelayErrorKind {
    /// A required request field was missing or empty
    #[display("Missing required fields")]
    Validation,
    /// The generation provider failed or returned nothing usable
    #[display("Failed to generate prompts")]
    Upstream(ModelsError),
}

/// Relay error with location tracking.
///
/// # Examples
///
/// ```
/// use journal_guru_error::{RelayError, RelayErrorKind};
///
/// let err = RelayError::new(RelayErrorKind::Validation);
/// assert!(format!("{}", err).contains("Missing required fields"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Relay Error: {} at line {} in {}", kind, line, file)]
pub struct RelayError {
    kind: RelayErrorKind,
    line: u32,
    file: &'static str,
}

impl RelayError {
    /// Create a new relay error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RelayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RelayErrorKind {
        &self.kind
    }

    /// Provider message attached to upstream failures.
    ///
    /// Carries the provider's own description without source location.
    pub fn details(&self) -> Option<String> {
        match &self.kind {
            RelayErrorKind::Validation => None,
            RelayErrorKind::Upstream(e) => Some(e.kind().to_string()),
        }
    }
}

impl From<ModelsError> for RelayError {
    #[track_caller]
    fn from(err: ModelsError) -> Self {
        Self::new(RelayErrorKind::Upstream(err))
    }
}
