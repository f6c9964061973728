use anyhow::Context;
use checklist_server::{router, AppState, ServerConfig, Settings};
use checklist_store::MemoryStore;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config)?;

    let credentials = config
        .credentials()
        .context("basic auth credentials are not configured")?;

    let state = AppState::new(Arc::new(MemoryStore::new()));
    let app = router(state, credentials);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(addr = %config.bind, settings = ?config.settings, "checklist API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("checklist API stopped");
    Ok(())
}

fn init_tracing(config: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(config.log_filter())
        .with_context(|| format!("invalid log filter '{}'", config.log_filter()))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.settings {
        Settings::Development => builder.with_target(false).init(),
        Settings::Production => builder.json().init(),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
