use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_db::DbError;
use folio_github::GithubError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Database error
    Database(DbError),

    /// GitHub API error
    Github(GithubError),

    /// Invalid request payload
    InvalidPayload(String),

    /// Not found (404)
    NotFound(String),

    /// Too many requests (429)
    RateLimited { retry_after_seconds: u64 },

    /// Internal server error
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::Github(e) => write!(f, "GitHub error: {}", e),
            ApiError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::RateLimited {
                retry_after_seconds,
            } => write!(f, "Rate limited, retry in {}s", retry_after_seconds),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error response JSON structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, retry_after_seconds) = match &self {
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                e.to_string(),
                None,
            ),
            ApiError::Github(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "github_error",
                e.to_string(),
                None,
            ),
            ApiError::InvalidPayload(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_payload", msg.clone(), None)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            ApiError::RateLimited {
                retry_after_seconds,
            } => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Please wait a moment before submitting again".to_string(),
                Some(*retry_after_seconds),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.clone(),
                None,
            ),
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
            retry_after_seconds,
        };

        (status, Json(error_response)).into_response()
    }
}

// Conversions from domain errors to ApiError
impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        ApiError::Database(e)
    }
}

impl From<GithubError> for ApiError {
    fn from(e: GithubError) -> Self {
        ApiError::Github(e)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::InvalidPayload("test error".to_string());
        assert_eq!(err.to_string(), "Invalid payload: test error");
    }

    #[test]
    fn test_error_response_invalid_payload() {
        let err = ApiError::InvalidPayload("bad json".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_not_found() {
        let err = ApiError::NotFound("no such post".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_response_rate_limited() {
        let err = ApiError::RateLimited {
            retry_after_seconds: 30,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_retry_after_serialization() {
        let body = ErrorResponse {
            error: "rate_limited".to_string(),
            message: "slow down".to_string(),
            retry_after_seconds: Some(30),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"retry_after_seconds\":30"));

        let body = ErrorResponse {
            error: "not_found".to_string(),
            message: "missing".to_string(),
            retry_after_seconds: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("retry_after_seconds"));
    }
}
