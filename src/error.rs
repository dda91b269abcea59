//! API error taxonomy and the single point converting failures into HTTP
//! responses: AUTH_REQUIRED -> 401, everything else a handler raises -> 400
//! with the message surfaced verbatim. Routing mismatches (404/405) are
//! produced by the router, not here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    AuthRequired,
    #[error("{0}")]
    Validation(String),
    /// Persistence or LLM failure, passed through to the client.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Upstream(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::AuthRequired => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::Upstream(_) => StatusCode::BAD_REQUEST,
        };
        match &self {
            ApiError::Upstream(e) => error!(error = %e, "request failed"),
            other => warn!(error = %other, "request rejected"),
        }
        let body = Json(json!({ "error": { "message": self.to_string() } }));
        (status, body).into_response()
    }
}

/// Parse a loose JSON body into a typed payload. Shape errors become the
/// 400 VALIDATION taxonomy instead of the framework's rejection format.
pub fn parse_body<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))
}
