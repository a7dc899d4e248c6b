//! Hackathon Marking API server
//!
//! Loads settings once, composes the route groups and serves them

use anyhow::{Context, Result};
use marking_api::utils::logging::init_logging;
use marking_api::{compose, version_info, AppContext, Settings, Stores};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration errors abort before anything binds
    let settings = Settings::load().context("Failed to load configuration")?;

    init_logging(settings.logging())?;
    info!("{} starting", version_info());
    info!("Database target: {}", settings.database().target());

    let addr = settings.server().bind_address();

    let context = AppContext::new(settings, Stores::in_memory());
    let app = compose(context).context("Failed to compose application")?;
    info!("Route groups attached: {:?}", app.route_groups());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 {} listening on http://{}", app.title(), addr);
    info!("📝 API documentation: http://{}/openapi.json", addr);

    axum::serve(listener, app.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C)
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
