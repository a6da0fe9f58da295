// ABOUTME: NutriTrack API server binary
// ABOUTME: Loads configuration, initializes logging and storage, serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # NutriTrack API Server Binary
//!
//! Starts the REST backend: food photo analysis, per-goal suggestions, user
//! goal lookup, and food logging.

use anyhow::Result;
use clap::Parser;
use nutritrack_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutritrack-server")]
#[command(about = "NutriTrack API - food photo analysis and nutrition logging backend")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting NutriTrack API");
    info!("{}", config.summary());

    if let DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized: {}",
        config.database.url.to_connection_string()
    );

    let resources = Arc::new(ServerResources::new(database, config));
    server::run(resources).await
}
