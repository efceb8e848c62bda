//! Workout planning routes

use crate::error::ApiError;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use ru_active_shared::types::{ProgressionRequest, ProgressionResponse};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new().route("/progression", post(progression))
}

/// POST /api/v1/workouts/progression - Next week's targets
async fn progression(
    Json(req): Json<ProgressionRequest>,
) -> Result<Json<ProgressionResponse>, ApiError> {
    Ok(Json(WorkoutService::progression(&req)?))
}
