mod analysis;
mod config;
mod db;
mod errors;
mod extraction;
mod interview;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{CompletionProvider, DisabledProvider, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("ats_api={},tower_http=info", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL is optional: without it reports are returned but not stored
    let db = match &config.database_url {
        Some(url) => Some(create_pool(url).await?),
        None => {
            warn!("DATABASE_URL not set, analysis reports will not be stored");
            None
        }
    };

    // Completion provider: every AI-backed component falls back when disabled
    let llm: Arc<dyn CompletionProvider> = match &config.llm.api_key {
        Some(key) => {
            let client = OpenAiClient::new(key.clone(), &config.llm)?;
            info!("LLM client initialized (model: {})", client.model());
            Arc::new(client)
        }
        None => {
            warn!("LLM_API_KEY not set, running with deterministic fallbacks only");
            Arc::new(DisabledProvider)
        }
    };

    let state = AppState {
        db,
        llm,
        config: config.clone(),
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
