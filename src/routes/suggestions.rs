// ABOUTME: Route handlers for per-goal food suggestions
// ABOUTME: Returns the catalog entries for a goal with a count
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Food suggestion routes
//!
//! `GET /food-suggestions/{goal}` returns the catalog bucket for the goal,
//! defaulting to maintenance for unknown goals. The payload deliberately
//! includes each record's `keywords` field; existing clients rely on it.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, FoodRecord, Goal};

/// Response for the food suggestions endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Catalog entries for the resolved goal
    pub data: Vec<FoodRecord>,
    /// Number of entries returned
    pub count: usize,
    /// The goal as requested by the client
    pub goal: String,
}

/// Food suggestion routes
pub struct FoodSuggestionRoutes;

impl FoodSuggestionRoutes {
    /// Create the food suggestions route
    pub fn routes() -> Router {
        Router::new().route("/food-suggestions/:goal", get(Self::handle_suggestions))
    }

    /// Handle a suggestions lookup
    async fn handle_suggestions(Path(goal): Path<String>) -> Response {
        let suggestions = catalog().for_goal(Goal::from_str_lossy(&goal));

        let response = SuggestionsResponse {
            success: true,
            data: suggestions.to_vec(),
            count: suggestions.len(),
            goal,
        };

        (StatusCode::OK, Json(response)).into_response()
    }
}
