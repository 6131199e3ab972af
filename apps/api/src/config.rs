use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::GEMINI_API_BASE;

/// Application configuration loaded from environment variables.
/// Fails at startup if `GOOGLE_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    /// Base URL of the Gemini models endpoint.
    pub gemini_api_base: String,
    pub port: u16,
    /// Port of the interactive upload form (bound to localhost only).
    pub form_port: u16,
    pub score_log_path: PathBuf,
    pub llm_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
            port: parse_env("PORT", 8000).context("PORT must be a valid port number")?,
            form_port: parse_env("FORM_PORT", 7865)
                .context("FORM_PORT must be a valid port number")?,
            score_log_path: std::env::var("SCORE_LOG_PATH")
                .unwrap_or_else(|_| "scored_resumes.json".to_string())
                .into(),
            llm_timeout: Duration::from_secs(
                parse_env("LLM_TIMEOUT_SECS", 120)
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => Ok(raw.trim().parse::<T>()?),
        Err(_) => Ok(default),
    }
}
