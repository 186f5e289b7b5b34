//! Error types for the weather/AQI server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamError;

// == Cache Error ==
/// Construction-time failures of the recency cache.
///
/// Every other cache operation is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Cache capacity must be greater than zero, got {0}")]
    InvalidCapacity(usize),
}

// == App Error Enum ==
/// Unified error type for request handling and startup.
#[derive(Error, Debug)]
pub enum AppError {
    /// Geocoding returned no match for the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream weather service failed or returned unusable data
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Misconfigured cache
    #[error("Configuration error: {0}")]
    Cache(#[from] CacheError),
}

impl AppError {
    /// HTTP status used when this error reaches a client.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let message = match &self {
            AppError::CityNotFound(_) => "City not found".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the server.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::CityNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream(UpstreamError::Status(503)).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Cache(CacheError::InvalidCapacity(0)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_city_not_found_body() {
        let response = AppError::CityNotFound("Atlantis".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "City not found");
        assert!(json["timestamp"].is_string());
    }
}
