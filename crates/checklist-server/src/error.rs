//! HTTP error mapping
//!
//! Every failure leaves the API as `{"error": "<message>"}` with a status
//! derived from its kind. Store failures are logged and masked.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use checklist_core::{CoreError, ValidationError};
use serde_json::json;

/// Errors surfaced by route handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Domain error from a manager or validator
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Request body missing or not declared as JSON
    #[error("No JSON in request")]
    UnsupportedMediaType,

    /// Request body is not valid JSON
    #[error("{0}")]
    BadRequest(String),

    /// No such route or unparsable path
    #[error("Not found")]
    NotFound,

    /// Missing or wrong credentials
    #[error("Not authorised")]
    Unauthorised,
}

impl ApiError {
    /// Status code for this error
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::Validation(_)) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::DoesNotExist(_)) | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Core(CoreError::Store(_) | CoreError::CorruptCounter { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Unauthorised => StatusCode::FORBIDDEN,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Core(CoreError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::UnsupportedMediaType,
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
