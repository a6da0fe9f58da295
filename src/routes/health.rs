// ABOUTME: Health check and API info route handlers for service monitoring
// ABOUTME: Provides the API landing endpoint and a liveness endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health and API info routes

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the API info and health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn index_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "NutriTrack API is running",
                "version": env!("CARGO_PKG_VERSION"),
                "endpoints": {
                    "nutriscan": "/api/nutriscan/analyze (POST)",
                    "food_suggestions": "/food-suggestions/:goal (GET)",
                    "user_data": "/user/:user_id (GET)",
                    "food_log": "/api/food/log (POST)"
                }
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
    }
}
