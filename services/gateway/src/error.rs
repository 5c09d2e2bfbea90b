use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datastore::DatastoreError;
use serde_json::json;
use thiserror::Error;
use tokens::TokenError;

/// Central error type for the gateway
///
/// The only place where domain errors become transport status codes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<DatastoreError> for AppError {
    fn from(err: DatastoreError) -> Self {
        match err {
            DatastoreError::NotFound => AppError::NotFound("no such resource".into()),
            DatastoreError::DuplicateEmail => AppError::Conflict("email already registered".into()),
            DatastoreError::Unauthorized => AppError::Unauthorized("bad credentials".into()),
            DatastoreError::Forbidden => AppError::Forbidden("you are not allowed to do this".into()),
            DatastoreError::BodyTooLong { len } => {
                AppError::BadRequest(format!("post body too long: {len} characters"))
            }
            other => AppError::InternalError(anyhow::anyhow!(other)),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing => AppError::InternalError(anyhow::anyhow!(err)),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED"),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, "FORBIDDEN"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, "CONFLICT"),
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
