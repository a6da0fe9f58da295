// ABOUTME: Route handlers for the NutriScan photo analysis endpoint
// ABOUTME: Multipart extraction, goal resolution, core invocation, response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! NutriScan analysis route
//!
//! `POST /api/nutriscan/analyze` takes a multipart form with an `image` file
//! field, a required `user_id` field, and an optional `user_goal` field.
//! When `user_goal` is absent the stored goal is fetched from the user store,
//! defaulting to maintenance when absent or on lookup failure.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, Timelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    catalog::Goal,
    errors::AppError,
    recognition::{self, Alternative, AnalyzedFood},
    resources::ServerResources,
    uploads,
};

/// Fixed algorithm label attached to every analysis
const ANALYSIS_ALGORITHM: &str = "NutriScan AI v1.0";

/// Headroom on top of the image cap for the other multipart fields
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Request metadata wrapped around one analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Confidence percentage in [85, 99]
    pub confidence: u8,
    /// Simulated processing time in seconds, 2 decimal places
    pub processing_time: String,
    /// Stored image filename
    pub image_id: String,
    /// Public URL of the stored image
    pub image_url: String,
    /// RFC3339 timestamp of the analysis
    pub timestamp: String,
    /// Fixed algorithm label
    pub algorithm: String,
}

/// Payload of a successful analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeData {
    /// Matched food with scaled macros and derived fields
    pub food: AnalyzedFood,
    /// Request metadata
    pub analysis: AnalysisMetadata,
    /// Up to 3 alternative suggestions
    pub alternatives: Vec<Alternative>,
    /// Advisory strings, never empty
    pub recommendations: Vec<String>,
}

/// Response envelope for the analyze endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Analysis payload
    pub data: AnalyzeData,
}

/// One uploaded image field before storage
struct ImageField {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// NutriScan analysis routes
pub struct NutriScanRoutes;

impl NutriScanRoutes {
    /// Create the analysis route with a body limit sized to the upload cap
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let body_limit = resources.config.uploads.max_size_bytes + MULTIPART_OVERHEAD_BYTES;
        Router::new()
            .route("/api/nutriscan/analyze", post(Self::handle_analyze))
            .layer(DefaultBodyLimit::max(body_limit))
            .with_state(resources)
    }

    /// Handle one analysis request
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        mut multipart: Multipart,
    ) -> Result<Response, AppError> {
        let mut image: Option<ImageField> = None;
        let mut user_id: Option<String> = None;
        let mut user_goal: Option<String> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::invalid_input(format!("Malformed multipart payload: {e}")))?
        {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("image") => {
                    let filename = field.file_name().map(str::to_owned).unwrap_or_default();
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await.map_err(|e| {
                        AppError::invalid_input(format!("Failed to read image field: {e}"))
                    })?;
                    image = Some(ImageField {
                        filename,
                        content_type,
                        bytes,
                    });
                }
                Some("user_id") => {
                    user_id = Some(field.text().await.map_err(|e| {
                        AppError::invalid_input(format!("Failed to read user_id field: {e}"))
                    })?);
                }
                Some("user_goal") => {
                    user_goal = Some(field.text().await.map_err(|e| {
                        AppError::invalid_input(format!("Failed to read user_goal field: {e}"))
                    })?);
                }
                _ => {}
            }
        }

        let image = image.ok_or_else(|| {
            AppError::invalid_input("No image file uploaded. Please select an image.")
        })?;
        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::missing_field("User ID is required"))?;

        let goal = Self::resolve_goal(&resources, &user_id, user_goal.as_deref()).await;

        let stored = uploads::store(
            &resources.config.uploads,
            &image.filename,
            image.content_type.as_deref(),
            &image.bytes,
        )
        .await?;

        info!(
            "Analyzing food image for goal: {}, user: {} ({} bytes)",
            goal.as_str(),
            user_id,
            stored.size_bytes
        );

        let hour = Local::now().hour();
        let mut rng = rand::thread_rng();
        let result = recognition::analyze(&stored.filename, goal, hour, &mut rng);
        let processing_time = format!("{:.2}", rng.gen_range(1.5..2.0));

        info!(
            "Analysis complete: {} ({}% confidence)",
            result.food.name, result.confidence
        );

        let response = AnalyzeResponse {
            success: true,
            data: AnalyzeData {
                food: result.food,
                analysis: AnalysisMetadata {
                    confidence: result.confidence,
                    processing_time,
                    image_id: stored.filename.clone(),
                    image_url: format!("/uploads/{}", stored.filename),
                    timestamp: Utc::now().to_rfc3339(),
                    algorithm: ANALYSIS_ALGORITHM.to_string(),
                },
                alternatives: result.alternatives,
                recommendations: result.recommendations,
            },
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Resolve the effective goal: request field first, stored goal second,
    /// maintenance as the final fallback
    async fn resolve_goal(
        resources: &Arc<ServerResources>,
        user_id: &str,
        user_goal: Option<&str>,
    ) -> Goal {
        if let Some(goal) = user_goal.filter(|g| !g.is_empty()) {
            return Goal::from_str_lossy(goal);
        }

        match resources.database.get_user(user_id).await {
            Ok(Some(profile)) => profile
                .goal
                .as_deref()
                .map_or(Goal::Maintenance, Goal::from_str_lossy),
            Ok(None) => Goal::Maintenance,
            Err(e) => {
                warn!("Goal lookup failed for user {user_id}: {e}");
                Goal::Maintenance
            }
        }
    }
}
