use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` must parse; everything else degrades gracefully when absent.
#[derive(Debug, Clone)]
pub struct Config {
    /// Persistence is disabled when unset.
    pub database_url: Option<String>,
    pub llm: LlmConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Settings handed to the AI adapter at construction.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// `None` selects the disabled provider: every component runs its fallback.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = LlmConfig::default();
        let timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(defaults.timeout.as_secs());

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            llm: LlmConfig {
                api_key: optional_env("LLM_API_KEY"),
                base_url: optional_env("LLM_BASE_URL").unwrap_or(defaults.base_url),
                model: optional_env("LLM_MODEL").unwrap_or(defaults.model),
                timeout: Duration::from_secs(timeout_secs),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
