use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;
use map_core::MapError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<MapError> for ApiError {
    fn from(err: MapError) -> Self {
        match err {
            MapError::NotFound(msg) => ApiError::NotFound(msg),
            MapError::InvalidInput(msg) => ApiError::BadRequest(msg),
            MapError::DataIntegrity(msg) => {
                warn!("data integrity fault: {}", msg);
                ApiError::InternalError(format!("Data integrity fault: {}", msg))
            }
        }
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
