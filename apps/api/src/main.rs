mod config;
mod errors;
mod llm_client;
mod models;
mod quote;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::quote::assembler::PromptAssembler;
use crate::quote::service::QuoteService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing GOOGLE_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sarcastic Quote API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation backend
    let gemini = GeminiClient::new(config.google_api_key.clone(), &config.gemini_api_base)
        .context("Failed to build Gemini client")?;
    info!("Gemini client initialized (model: {})", llm_client::MODEL);

    let assembler = Arc::new(PromptAssembler::new());
    info!(
        "Prompt assembler ready with {} few-shot turns",
        assembler.examples().len()
    );

    let state = AppState {
        quotes: QuoteService::new(assembler, Arc::new(gemini)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
