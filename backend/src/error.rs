use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use generation_client::GenerationError;
use serde_json::json;
use thiserror::Error;

/// The two failure modes of the service: the caller's fault (400) or the
/// upstream generation service's fault (500). Nothing else.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Text generation failed: {0}")]
    Upstream(String),
}

impl From<GenerationError> for ApiError {
    fn from(error: GenerationError) -> Self {
        ApiError::Upstream(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
