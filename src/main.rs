use anyhow::{Context, Result};
use log::info;
use siterank::{api, utils::init_logging, AnalysisClient, AppState, Config};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::from_env().context("failed to load configuration")?;
    let client = AnalysisClient::from_config(&config)?;
    let shared_state = Arc::new(AppState::new(client));

    let app = api::router(shared_state);

    info!(
        "🚀 Viewer running on http://{} (analysis service: {})",
        config.bind_addr, config.analyzer_url
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
