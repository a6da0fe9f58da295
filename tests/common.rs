// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, config, and resource creation helpers
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared test utilities for `nutritrack_server`

use anyhow::Result;
use nutritrack_server::{
    config::environment::{
        CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig, UploadConfig,
    },
    database::{Database, UserProfile},
    resources::ServerResources,
};
use std::path::Path;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Server configuration pointing at an in-memory database and the given
/// uploads directory
pub fn test_config(uploads_dir: &Path) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        log_level: LogLevel::Warn,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_string(),
        },
        uploads: UploadConfig {
            dir: uploads_dir.to_path_buf(),
            max_size_bytes: 10 * 1024 * 1024,
        },
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Full resource bundle for router tests. The returned `TempDir` keeps the
/// uploads directory alive for the duration of the test.
pub async fn create_test_resources() -> Result<(Arc<ServerResources>, tempfile::TempDir)> {
    let uploads_dir = tempfile::tempdir()?;
    let config = test_config(uploads_dir.path());
    let database = create_test_database().await?;
    Ok((Arc::new(ServerResources::new(database, config)), uploads_dir))
}

/// Seed one user row
pub async fn seed_user(
    database: &Database,
    id: &str,
    goal: Option<&str>,
    daily_calories: Option<i64>,
) -> Result<()> {
    database
        .upsert_user(&UserProfile {
            id: id.to_string(),
            goal: goal.map(str::to_owned),
            daily_calories,
        })
        .await
}

/// Fresh user id per test to keep cases independent
pub fn unique_user_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
