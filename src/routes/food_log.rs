// ABOUTME: Route handlers for food-log persistence
// ABOUTME: Validates required fields, applies defaults, inserts into the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Food log routes
//!
//! `POST /api/food/log` persists one consumed-food record. `user_id`,
//! `food_name`, and `calories` are required; everything else defaults the way
//! existing clients expect (meal type "lunch", today's date, local time,
//! unscanned, "85%" confidence).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::{
    database::FoodLogEntry,
    errors::AppError,
    resources::ServerResources,
};

/// Request body for logging a consumed food
#[derive(Debug, Deserialize, Default)]
pub struct FoodLogRequest {
    /// Owning user (required)
    pub user_id: Option<String>,
    /// Food display name (required)
    pub food_name: Option<String>,
    /// Calories consumed (required)
    pub calories: Option<f64>,
    /// Protein grams
    pub protein: Option<f64>,
    /// Carbohydrate grams
    pub carbs: Option<f64>,
    /// Fat grams
    pub fat: Option<f64>,
    /// Meal type label
    pub meal_type: Option<String>,
    /// Log date, YYYY-MM-DD
    pub log_date: Option<String>,
    /// Log time, h:mm:ss AM/PM
    pub log_time: Option<String>,
    /// Whether the entry came from a photo scan
    pub scanned: Option<bool>,
    /// Confidence string, e.g. "92%"
    pub confidence: Option<String>,
}

/// Payload of a successful log insert
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodLogData {
    /// Assigned row id
    pub id: i64,
    /// Human-readable confirmation
    pub message: String,
    /// Echo of the scanned flag
    pub scanned: bool,
    /// RFC3339 timestamp of the insert
    pub timestamp: String,
}

/// Response envelope for the food log endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodLogResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Insert confirmation
    pub data: FoodLogData,
}

/// Food log routes
pub struct FoodLogRoutes;

impl FoodLogRoutes {
    /// Create the food log route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/food/log", post(Self::handle_log_food))
            .with_state(resources)
    }

    /// Handle one food-log insert
    async fn handle_log_food(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<FoodLogRequest>,
    ) -> Result<Response, AppError> {
        let (user_id, food_name, calories) = match (
            request.user_id.filter(|id| !id.is_empty()),
            request.food_name.filter(|name| !name.is_empty()),
            request.calories,
        ) {
            (Some(user_id), Some(food_name), Some(calories)) => (user_id, food_name, calories),
            _ => {
                return Err(AppError::missing_field(
                    "Missing required fields: user_id, food_name, and calories are required",
                ))
            }
        };

        let now = Local::now();
        let scanned = request.scanned.unwrap_or(false);
        let entry = FoodLogEntry {
            user_id,
            food_name,
            calories,
            protein: request.protein.unwrap_or(0.0),
            carbs: request.carbs.unwrap_or(0.0),
            fat: request.fat.unwrap_or(0.0),
            meal_type: request.meal_type.unwrap_or_else(|| "lunch".to_string()),
            log_date: request
                .log_date
                .unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
            log_time: request
                .log_time
                .unwrap_or_else(|| now.format("%l:%M:%S %p").to_string().trim().to_string()),
            scanned,
            confidence: request.confidence.unwrap_or_else(|| "85%".to_string()),
        };

        let id = resources
            .database
            .log_food(&entry)
            .await
            .map_err(|e| AppError::database(format!("Failed to log food: {e}")))?;

        info!("Food logged successfully, ID: {id}");

        let response = FoodLogResponse {
            success: true,
            data: FoodLogData {
                id,
                message: "Food logged successfully".to_string(),
                scanned,
                timestamp: Utc::now().to_rfc3339(),
            },
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
