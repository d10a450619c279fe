pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quote::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/health", get(health::health_handler))
        .route("/quote", post(handlers::handle_quote))
        .with_state(state)
}
