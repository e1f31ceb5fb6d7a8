use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use expense_api::{create_router, state::AppState};
use expense_core::services::GroupService;
use expense_infrastructure::database::{connection, PgGroupRepository};
use expense_shared::config::AppConfig;
use expense_web::Renderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry
    let _log_guard = expense_shared::telemetry::init_telemetry(&config.log);

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database).await?;
    connection::run_migrations(&pool).await?;
    info!("Database connection established.");

    // Create App State
    let group_repo = Arc::new(PgGroupRepository::new(pool));
    let state = AppState::new(GroupService::new(group_repo), Renderer::new()?);

    // Build router
    let app = create_router(state, &config.app)?;

    // Bind address
    let addr = config.bind_address()?;
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
