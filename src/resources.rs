// ABOUTME: Shared server state threaded through route handlers
// ABOUTME: Bundles the database handle and server configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared server resources
//!
//! Route constructors take `Arc<ServerResources>` as state. The catalog is
//! not part of this bundle: it is process-wide and read-only, exposed via
//! [`crate::catalog::catalog`].

use crate::config::environment::ServerConfig;
use crate::database::Database;

/// Dependencies shared by all route handlers
pub struct ServerResources {
    /// SQLite storage for users and food logs
    pub database: Database,
    /// Runtime configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the server's shared dependencies
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}
