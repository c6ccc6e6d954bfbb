//! Error types for the cache and the catalog server
//!
//! `CacheError` is what the cache core reports; `ApiError` is what the HTTP
//! layer turns into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors surfaced by the cache core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// Key is not resident
    #[error("key not found")]
    NotFound,

    /// Cache constructed with a capacity that can never hold an entry
    #[error("cache capacity must be greater than zero")]
    InvalidCapacity,

    /// Eviction attempted on an empty recency list
    #[error("recency list is empty")]
    EmptyList,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Api Error Enum ==
/// Error type returned by the catalog HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested item is not in the catalog
    #[error("{0}")]
    NotFound(String),

    /// Query parameters missing or malformed
    #[error("{0}")]
    InvalidRequest(String),

    /// Anything the caller cannot fix
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::NotFound => ApiError::NotFound(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(CacheError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_variants_map_to_500() {
        let response = ApiError::from(CacheError::EmptyList).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::from(CacheError::InvalidCapacity).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ApiError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::NotFound.to_string(), "key not found");
        assert_eq!(
            ApiError::NotFound("no such item: \"hat\"".to_string()).to_string(),
            "no such item: \"hat\""
        );
    }
}
