use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use expense_core::DomainError;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const GROUP_NOT_FOUND_MESSAGE: &str = "Group not found";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Error body: `{ "error": "<message>" }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::GroupNotFound(_) => ApiError::NotFound(GROUP_NOT_FOUND_MESSAGE.to_string()),
            DomainError::DatabaseError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            },
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            },
            ApiError::InternalError(msg) => {
                // Details stay in the log, the caller only sees a generic message.
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE.to_string())
            },
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        assert!(matches!(
            ApiError::from(DomainError::ValidationError("x".into())),
            ApiError::BadRequest(m) if m == "x"
        ));
        assert!(matches!(
            ApiError::from(DomainError::GroupNotFound(9)),
            ApiError::NotFound(m) if m == GROUP_NOT_FOUND_MESSAGE
        ));
        assert!(matches!(
            ApiError::from(DomainError::DatabaseError("timeout".into())),
            ApiError::InternalError(_)
        ));
    }

    #[test]
    fn test_internal_error_status() {
        let response = ApiError::InternalError("password=hunter2".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
