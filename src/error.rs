use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::response;

/// Every failure a handler can report.
///
/// Each variant owns its HTTP status and client-facing message, so the
/// status is never derived from the message text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body was not the JSON the route expects.
    #[error("Error decoding params: {0}")]
    Decode(String),
    /// Chirp body with no characters.
    #[error("Invalid chirp")]
    EmptyChirp,
    /// Chirp body longer than the allowed number of characters.
    #[error("Chirp is too long")]
    ChirpTooLong,
    /// The `{chirp_id}` path segment is not a UUID.
    #[error("Error parsing UUID: {0}")]
    InvalidChirpId(String),
    /// The store rejected or failed the operation.
    #[error("Error {action}: {detail}")]
    Storage { action: &'static str, detail: String },
    /// The store did not answer within the configured query timeout.
    #[error("Storage request timed out")]
    StorageTimeout,
    /// Lookup by id found nothing.
    #[error("404 Chirp Not Found")]
    ChirpNotFound,
    /// Admin action refused outside the `dev` platform.
    #[error("403 Forbidden")]
    Forbidden,
    /// Failures that are not the client's fault (hashing, task joins).
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn storage(action: &'static str, err: sqlx::Error) -> Self {
        AppError::Storage { action, detail: err.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_)
            | AppError::EmptyChirp
            | AppError::ChirpTooLong
            | AppError::InvalidChirpId(_)
            | AppError::Storage { .. } => StatusCode::BAD_REQUEST,
            AppError::StorageTimeout => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ChirpNotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(e) => tracing::error!("Internal error: {:?}", e),
            AppError::Storage { .. } | AppError::StorageTimeout => tracing::warn!("{}", self),
            _ => tracing::debug!("Rejected request: {}", self),
        }

        let status = self.status();
        response::json(status, &ErrorBody { error: self.to_string() })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Decode(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// A type alias for `Result<T, AppError>`, used by every handler.
pub type AppResult<T> = Result<T, AppError>;
