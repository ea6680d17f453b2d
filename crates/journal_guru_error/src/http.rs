//! HTTP error types.

/// Relay listener failure, with source location.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use journal_guru_error::HttpError;
    ///
    /// let err = HttpError::new("Address already in use");
    /// assert!(err.message.contains("already in use"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl HttpError {
    /// The relay could not bind its listening address.
    #[track_caller]
    pub fn bind(addr: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to bind {}: {}", addr, reason))
    }

    /// The running relay stopped with an I/O failure.
    #[track_caller]
    pub fn serve(reason: impl std::fmt::Display) -> Self {
        Self::new(format!("Relay server error: {}", reason))
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Relay HTTP Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for HttpError {}
