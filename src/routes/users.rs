// ABOUTME: Route handlers for user goal lookup
// ABOUTME: Returns the stored goal and calorie target or a 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User routes
//!
//! `GET /user/{user_id}` returns the stored goal and daily calorie target
//! for a user, or 404 when the id is unknown.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::{database::UserProfile, errors::AppError, resources::ServerResources};

/// Response for the user lookup endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Stored profile
    pub data: UserProfile,
}

/// User routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create the user lookup route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/user/:user_id", get(Self::handle_get_user))
            .with_state(resources)
    }

    /// Handle a user goal lookup
    async fn handle_get_user(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        debug!("Fetching user data for ID: {user_id}");

        let profile = resources
            .database
            .get_user(&user_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user {user_id}: {e}")))?
            .ok_or_else(|| AppError::not_found("User"))?;

        let response = UserResponse {
            success: true,
            data: profile,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
