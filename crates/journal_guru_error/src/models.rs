//! Generation provider error types.

/// Provider-side failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Failed to construct the HTTP client
    #[display("Failed to create provider client: {_0}")]
    ClientCreation(String),
    /// Transport-level failure (connection refused, DNS, TLS)
    #[display("Request failed: {_0}")]
    Http(String),
    /// The outbound call exceeded its configured timeout
    #[display("Request timed out: {_0}")]
    Timeout(String),
    /// Provider answered with a non-success status
    #[display("HTTP {status} error: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Body returned by the provider
        message: String,
    },
    /// Provider body could not be decoded
    #[display("Failed to parse response: {_0}")]
    ResponseParsing(String),
    /// Provider response carried no text in its first content item
    #[display("Provider response contained no text content")]
    EmptyResponse,
}

/// Provider error with location tracking.
///
/// # Examples
///
/// ```
/// use journal_guru_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at line {} in {}", kind, line, file)]
pub struct ModelsError {
    kind: ModelsErrorKind,
    line: u32,
    file: &'static str,
}

impl ModelsError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ModelsErrorKind {
        &self.kind
    }
}

impl<T> From<T> for ModelsError
where
    T: Into<ModelsErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for provider operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
