use axum::http::Uri;

use crate::shared::error::ApiError;

/// Shared fallback for every unmatched route
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
