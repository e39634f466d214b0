use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when DATABASE_URL is unset; analysis still runs, reports are not stored.
    pub db: Option<PgPool>,
    /// OpenAI-compatible adapter, or `DisabledProvider` when no API key is configured.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
