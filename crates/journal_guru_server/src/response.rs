//! JSON bodies and HTTP status mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use journal_guru_error::{RelayError, RelayErrorKind};
use serde::{Deserialize, Serialize};

/// Error payload returned for 400 and 500 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Generic, user-facing message
    pub error: String,
    /// Underlying provider message, present on upstream failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    /// Always `"ok"`
    pub status: String,
    /// Fixed human-readable message
    pub message: String,
}

impl HealthBody {
    /// The fixed liveness response.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

/// A relay error on its way out as an HTTP response.
#[derive(Debug)]
pub struct RelayFailure(pub RelayError);

impl RelayFailure {
    /// Status code for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            RelayErrorKind::Validation => StatusCode::BAD_REQUEST,
            RelayErrorKind::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for the wrapped error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.0.kind().to_string(),
            details: self.0.details(),
        }
    }
}

impl From<RelayError> for RelayFailure {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RelayFailure {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
