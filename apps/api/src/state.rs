use crate::quote::service::QuoteService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it is mutated while serving.
#[derive(Clone)]
pub struct AppState {
    pub quotes: QuoteService,
}
