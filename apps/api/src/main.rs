mod ai;
mod config;
mod errors;
mod export;
mod llm_client;
mod render;
mod resume;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::capture::CommandCapture;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::store::spawn_reaper;
use crate::session::SessionStore;
use crate::state::AppState;

const REAP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careerdesk API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_max_attempts)?;
    info!(
        model = llm_client::MODEL,
        max_attempts = config.llm_max_attempts,
        "LLM client initialized"
    );

    let capture = CommandCapture::new(config.capture_command.clone(), config.capture_scale);
    info!(
        command = %config.capture_command,
        scale = config.capture_scale,
        "Surface capture configured"
    );

    let sessions = SessionStore::new();
    let ttl = Duration::from_secs(config.session_ttl_secs);
    spawn_reaper(sessions.clone(), ttl, REAP_INTERVAL);
    info!(ttl_secs = config.session_ttl_secs, "Session reaper started");

    let state = AppState {
        sessions,
        llm: Arc::new(llm),
        capture: Arc::new(capture),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
