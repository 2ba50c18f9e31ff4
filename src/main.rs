mod api;
mod app_state;
mod core;
mod domain;
mod errors;
mod logging;
mod routes;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::app_state::build_app_state;
use crate::core::config::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _log_guard = logging::init_logging(&AppConfig::log_dir_from_env());
    let config = AppConfig::from_env();
    info!(
        "Starting graphview-core {} (graphite={}, icinga={}, templates={})",
        env!("CARGO_PKG_VERSION"),
        config.graphite.base_url,
        config.icinga.base_url,
        config.template_path.display()
    );

    let state = build_app_state(&config)?;
    let app = routes::app_router().with_state(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
