// ABOUTME: Router assembly and server lifecycle for the NutriTrack API
// ABOUTME: Wires routes, CORS, request tracing, static uploads, and graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and server lifecycle

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{
    FoodLogRoutes, FoodSuggestionRoutes, HealthRoutes, NutriScanRoutes, UserRoutes,
};

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    let uploads_dir = resources.config.uploads.dir.clone();

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(NutriScanRoutes::routes(resources.clone()))
        .merge(FoodSuggestionRoutes::routes())
        .merge(UserRoutes::routes(resources.clone()))
        .merge(FoodLogRoutes::routes(resources))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error when binding or serving fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    tokio::fs::create_dir_all(&resources.config.uploads.dir).await?;

    let address = format!("0.0.0.0:{}", resources.config.http_port);
    let app = router(resources);

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives
async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}
