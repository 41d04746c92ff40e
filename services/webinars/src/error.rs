//! Custom error types for the webinars service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::use_cases::{ChangeSeatsError, ErrorKind};

/// Custom error type for the webinars service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Acting user may not perform the operation
    #[error("{0}")]
    Unauthorized(String),

    /// Bad request with message
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl From<ChangeSeatsError> for ApiError {
    fn from(err: ChangeSeatsError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            ErrorKind::Forbidden => ApiError::Unauthorized(err.to_string()),
            ErrorKind::InvalidOperation => ApiError::BadRequest(err.to_string()),
            ErrorKind::Internal => {
                tracing::error!("Failed to change seats: {}", err);
                ApiError::InternalServerError
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::SeatsError, repositories::RepositoryError};

    #[test]
    fn change_seats_errors_map_to_statuses() {
        let cases = [
            (ChangeSeatsError::NotFound, StatusCode::NOT_FOUND),
            (ChangeSeatsError::Forbidden, StatusCode::UNAUTHORIZED),
            (
                ChangeSeatsError::InvalidOperation(SeatsError::Reduction),
                StatusCode::BAD_REQUEST,
            ),
            (
                ChangeSeatsError::InvalidOperation(SeatsError::AboveMaximum),
                StatusCode::BAD_REQUEST,
            ),
            (
                ChangeSeatsError::Repository(RepositoryError::Unavailable("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn messages_are_kept_verbatim() {
        assert_eq!(
            ApiError::from(ChangeSeatsError::Forbidden).to_string(),
            "User is not allowed to update this webinar"
        );
        assert_eq!(
            ApiError::from(ChangeSeatsError::Repository(RepositoryError::Missing(
                "x".to_string()
            )))
            .to_string(),
            "Internal server error"
        );
    }
}
