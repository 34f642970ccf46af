//! Error types for the registry and its HTTP host.
//!
//! [`RegistryError`] is the domain taxonomy returned by
//! [`crate::domain::ParticipantRegistry`]. [`ApiError`] wraps it for the
//! host and maps each variant to an HTTP status code and a structured JSON
//! body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "participant already added: Ana"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Machine-readable error kind (e.g. `"duplicate_name"`).
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Outcomes of a registry operation that did not succeed.
///
/// All variants are recoverable; the registry is unchanged after any of
/// them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Candidate name is empty after trimming.
    #[error("participant name is empty")]
    EmptyName,

    /// A name equal ignoring case is already registered.
    #[error("participant already added: {0}")]
    DuplicateName(String),

    /// Fewer names than a draw requires.
    #[error("at least 2 participants are required to draw, have {count}")]
    InsufficientParticipants {
        /// Names currently registered.
        count: usize,
    },

    /// Names cannot be added while a result is shown.
    #[error("a winner has already been drawn; reset before adding participants")]
    AlreadyDrawn,

    /// The injected random source returned an index past the end.
    #[error("random source returned index {index} for {len} participants")]
    IndexOutOfRange {
        /// Index returned by the source.
        index: usize,
        /// Number of names at draw time.
        len: usize,
    },
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category         | HTTP Status                  |
/// |-----------|------------------|------------------------------|
/// | 1000–1999 | Validation       | 400 Bad Request              |
/// | 2000–2999 | State conflict   | 409 Conflict                 |
/// | 3000–3999 | Server           | 500 Internal Server Error    |
/// | 4000–4999 | Draw             | 422 Unprocessable Entity     |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Error returned by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Request body or message could not be understood.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Registry(RegistryError::EmptyName) => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::Registry(RegistryError::DuplicateName(_)) => 2001,
            Self::Registry(RegistryError::AlreadyDrawn) => 2002,
            Self::Registry(RegistryError::InsufficientParticipants { .. }) => 4001,
            Self::Registry(RegistryError::IndexOutOfRange { .. }) | Self::Internal(_) => 3000,
        }
    }

    /// Returns the machine-readable kind for this variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Registry(RegistryError::EmptyName) => "empty_name",
            Self::Registry(RegistryError::DuplicateName(_)) => "duplicate_name",
            Self::Registry(RegistryError::InsufficientParticipants { .. }) => {
                "insufficient_participants"
            }
            Self::Registry(RegistryError::AlreadyDrawn) => "already_drawn",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Registry(RegistryError::IndexOutOfRange { .. }) | Self::Internal(_) => "internal",
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Registry(RegistryError::EmptyName) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Registry(RegistryError::DuplicateName(_) | RegistryError::AlreadyDrawn) => {
                StatusCode::CONFLICT
            }
            Self::Registry(RegistryError::InsufficientParticipants { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Registry(RegistryError::IndexOutOfRange { .. }) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the JSON body for this error.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.error_code(),
            kind: self.kind().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.to_body(),
        };
        (status, axum::Json(body)).into_response()
    }
}
