// ABOUTME: Main library entry point for the NutriTrack nutrition tracking backend
// ABOUTME: Provides food photo analysis, suggestions, user goals, and food logging over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # NutriTrack Server
//!
//! A REST backend for a nutrition-tracking app. It accepts an uploaded food
//! photo plus a user goal and returns a simulated nutrition estimate, and it
//! offers endpoints to fetch per-goal food suggestions, fetch a user's stored
//! goal, and log consumed food to a relational store.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable goal-keyed food table, compiled once at startup
//! - **Recognition**: the food-matching and recommendation heuristic
//! - **Routes**: thin axum handlers that delegate to the core and the store
//! - **Database**: SQLite-backed user and food-log storage
//! - **Uploads**: image validation and on-disk storage, served statically
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nutritrack_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("NutriTrack API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Static food catalog keyed by dietary goal
pub mod catalog;

/// Configuration management from environment variables
pub mod config;

/// SQLite-backed user and food-log storage
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Food matching and recommendation heuristic
pub mod recognition;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Upload validation and storage
pub mod uploads;
