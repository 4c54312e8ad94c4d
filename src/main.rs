#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use sheet_catalog::{
    app::{self, AppState},
    config::AppConfig,
    error::{AppError, Result},
    source,
};
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Catalog service failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Catalog service stopped");
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;

    let state = AppState::connect(&config.sheets).await?;
    let rows = source::check_health(state.source.as_ref()).await?;
    tracing::info!(
        "Worksheet '{}' of spreadsheet {} holds {} product rows",
        config.sheets.worksheet,
        config.sheets.spreadsheet_id,
        rows
    );

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::ConfigError(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Serving /shop and /product on {}", addr);

    axum::serve(listener, app::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received, draining requests"),
        _ = terminate => tracing::info!("SIGTERM received, draining requests"),
    }
}
