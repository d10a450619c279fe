//! Axum route handlers for the Quote API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::quote::service::QuoteResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Sarcastic Quote API. POST to /quote with a mood."
    }))
}

/// POST /quote
///
/// Always answers 200 once the body is well-formed; failures come back as `{"error": ...}`.
pub async fn handle_quote(
    State(state): State<AppState>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> Result<Json<QuoteResult>, AppError> {
    let Json(request) = payload?;
    Ok(Json(state.quotes.handle_quote_request(&request.mood).await))
}
