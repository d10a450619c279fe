use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Transport-level error type, raised before a handler runs its own logic.
/// Domain failures are not `AppError`s: they are reported as 200 `{"error": ...}` payloads.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidBody(rejection) => {
                tracing::debug!("Rejected request body: {rejection}");
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
