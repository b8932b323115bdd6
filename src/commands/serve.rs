//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{DurableClient, FallbackStore, StoreSelector};

/// Execute the serve command.
///
/// The primary store client is built without touching the network, so the
/// server starts regardless of primary reachability; each operation probes
/// on its own.
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server in {} mode...", config.mode);

    let selector = Arc::new(build_selector(&config).await?);

    let app_state = AppState::from_selector(selector, config);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Wire the store selector from configuration.
pub async fn build_selector(config: &Config) -> AppResult<StoreSelector> {
    let durable = match &config.mongodb_uri {
        Some(uri) => Some(Arc::new(
            DurableClient::new(uri, &config.database_name, config.connect_timeout_ms).await?,
        )),
        None => {
            tracing::warn!("MONGODB_URI not set; the primary store is treated as unreachable");
            None
        }
    };

    let fallback = Arc::new(FallbackStore::new(&config.data_dir, config.mode));

    Ok(StoreSelector::new(durable, fallback, config.mode))
}
