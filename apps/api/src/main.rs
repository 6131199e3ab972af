mod config;
mod errors;
mod evaluation;
mod extraction;
mod form;
mod llm_client;
mod models;
mod routes;
mod score_log;
mod state;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::evaluator::ResumeEvaluator;
use crate::llm_client::LlmClient;
use crate::routes::{build_form_router, build_router};
use crate::score_log::ScoreLog;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing GOOGLE_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Evaluation API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.google_api_key.clone(),
        config.gemini_api_base.clone(),
        config.llm_timeout,
    )
        .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout.as_secs()
    );

    let score_log = ScoreLog::new(config.score_log_path.clone());
    info!("Form results append to {}", score_log.path().display());

    // Build app state
    let state = AppState {
        evaluator: ResumeEvaluator::new(Arc::new(llm)),
        score_log,
    };

    // Build routers
    let api = build_router(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    let form = build_form_router(state).layer(TraceLayer::new_for_http());

    let api_addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let form_addr: SocketAddr = format!("127.0.0.1:{}", config.form_port).parse()?;

    let api_listener = tokio::net::TcpListener::bind(api_addr)
        .await
        .with_context(|| format!("Failed to bind API listener on {api_addr}"))?;
    let form_listener = tokio::net::TcpListener::bind(form_addr)
        .await
        .with_context(|| format!("Failed to bind form listener on {form_addr}"))?;

    info!("API listening on {api_addr}");
    info!("Upload form listening on http://{form_addr}");

    tokio::try_join!(
        async { axum::serve(api_listener, api).await },
        async { axum::serve(form_listener, form).await },
    )?;

    Ok(())
}
