//! Error types for the Journal Guru prompt relay.
//!
//! Every error records the file and line where it was created.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod composer;
mod config;
mod http;
mod models;
mod relay;

pub use composer::{ComposerError, ComposerErrorKind};
pub use config::ConfigError;
pub use http::HttpError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use relay::{RelayError, RelayErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum JournalGuruErrorKind {
    /// HTTP listener or transport error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Generation provider error
    Models(ModelsError),
    /// Relay endpoint error
    Relay(RelayError),
    /// Prompt composer error
    Composer(ComposerError),
}

impl std::fmt::Display for JournalGuruErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JournalGuruErrorKind::Http(e) => write!(f, "{}", e),
            JournalGuruErrorKind::Config(e) => write!(f, "{}", e),
            JournalGuruErrorKind::Models(e) => write!(f, "{}", e),
            JournalGuruErrorKind::Relay(e) => write!(f, "{}", e),
            JournalGuruErrorKind::Composer(e) => write!(f, "{}", e),
        }
    }
}

/// Journal Guru error with kind discrimination.
#[derive(Debug)]
pub struct JournalGuruError(Box<JournalGuruErrorKind>);

impl JournalGuruError {
    /// Create a new error from a kind.
    pub fn new(kind: JournalGuruErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &JournalGuruErrorKind {
        &self.0
    }
}

impl std::fmt::Display for JournalGuruError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Journal Guru Error: {}", self.0)
    }
}

impl std::error::Error for JournalGuruError {}

impl<T> From<T> for JournalGuruError
where
    T: Into<JournalGuruErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Journal Guru operations.
pub type JournalGuruResult<T> = std::result::Result<T, JournalGuruError>;
