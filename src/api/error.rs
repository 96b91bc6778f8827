use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};

use crate::Error;

/// API-layer error type
#[derive(Debug)]
pub enum ApiError {
    /// 404 - Unknown company or unresolvable search
    NotFound(String),

    /// 500 - Missing or corrupt sources, template failures
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, message).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(msg) => {
                warn!(kind = "not_found"; "{}", msg);
                ApiError::NotFound(msg)
            }
            other => {
                error!(kind = other.kind(); "Request failed: {}", other);
                ApiError::Internal("Internal Server Error".to_string())
            }
        }
    }
}
