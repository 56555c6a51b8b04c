use std::sync::Arc;

use anyhow::Context;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::database::{DatabaseManager, MemoryPostRepository, PgPostRepository, PostRepository};

pub async fn handle(config: AppConfig, memory: bool) -> anyhow::Result<()> {
    let repository: Arc<dyn PostRepository> = if memory {
        tracing::warn!("Using in-memory post store; data is lost on exit");
        Arc::new(MemoryPostRepository::seeded())
    } else {
        let pool = DatabaseManager::init(&config.database)
            .await
            .context("failed to connect to database")?;
        Arc::new(PgPostRepository::new(pool))
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let router = app(AppState::new(config, repository));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Post API listening on http://{}", bind_addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    DatabaseManager::close().await;
    served.context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
