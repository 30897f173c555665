use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::{ErrorEnvelope, FailureBody};
use thiserror::Error;

/// Errors a report handler can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Data store failure: 500 `{message, error}`
    #[error("{message}: {detail}")]
    Store {
        message: &'static str,
        detail: String,
    },

    /// Malformed query parameter: 400 envelope
    #[error("{0}")]
    InvalidQuery(String),

    /// Unknown route: fixed 404 envelope
    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    /// Wrap a store error under the endpoint's static message
    pub fn store(message: &'static str, err: anyhow::Error) -> Self {
        ApiError::Store {
            message,
            detail: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Store { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                let body = FailureBody {
                    message: message.to_string(),
                    error: detail,
                };
                (status, Json(body)).into_response()
            }
            ApiError::InvalidQuery(message) => {
                (status, Json(ErrorEnvelope::new(status.as_u16(), message))).into_response()
            }
            ApiError::NotFound => (status, Json(ErrorEnvelope::not_found())).into_response(),
        }
    }
}
