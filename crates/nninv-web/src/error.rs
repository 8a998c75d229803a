//! Error type returned by handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nninv_review::ReviewError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// An external service failed; the message is safe to show.
    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ReviewError> for ApiError {
    fn from(e: ReviewError) -> Self {
        match e {
            ReviewError::NotFound(_) => Self::NotFound(e.to_string()),
            ReviewError::Validation(msg) => Self::BadRequest(msg),
            ReviewError::Service(inner) => Self::Upstream(inner.to_string()),
            ReviewError::Store(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        Self::Internal(format!("template rendering failed: {e:#}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
