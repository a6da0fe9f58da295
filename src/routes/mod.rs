// ABOUTME: Route module organization for the NutriTrack HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the recognition core and the store.

/// Food-log persistence routes
pub mod food_log;
/// Health check and API info routes
pub mod health;
/// Food photo analysis routes
pub mod nutriscan;
/// Per-goal food suggestion routes
pub mod suggestions;
/// User goal lookup routes
pub mod users;

/// Food-log route handlers
pub use food_log::FoodLogRoutes;
/// Health route handlers
pub use health::HealthRoutes;
/// NutriScan analysis route handlers
pub use nutriscan::NutriScanRoutes;
/// Food suggestion route handlers
pub use suggestions::FoodSuggestionRoutes;
/// User route handlers
pub use users::UserRoutes;
