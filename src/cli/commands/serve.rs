//! Serve command: run the HTTP server until Ctrl+C

use std::sync::Arc;
use tracing::info;

use super::shared::{build_data_service, setup_logging};
use crate::app::adapters::http::create_router;
use crate::cli::args::ServeArgs;
use crate::{Error, Result};

/// Run the HTTP server with the resolved configuration
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(&args.common)?;

    let config = args.to_config()?;
    let service = Arc::new(build_data_service(&config.csv_path));
    let app = create_router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", config.bind_addr), e))?;

    info!(
        "Serving {} on http://{}",
        config.csv_path.display(),
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::io("HTTP server failed", e))?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when Ctrl+C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down gracefully...");
}
