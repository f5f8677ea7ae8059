use crate::ApiError;
use axum::http::Uri;
use axum::response::IntoResponse;

/// Fallback for every unknown route
pub async fn default_handler(uri: Uri) -> impl IntoResponse {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
