//! Nutrition API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use ru_active_shared::types::{NutritionRequest, NutritionResponse};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/suggestion", get(get_suggestion))
        .route("/calculate", post(calculate))
}

/// GET /api/v1/nutrition/suggestion - Targets from the stored profile
async fn get_suggestion(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<NutritionResponse>, ApiError> {
    let response = ProfileService::nutrition_suggestion(state.db(), &auth.username).await?;
    Ok(Json(response))
}

/// POST /api/v1/nutrition/calculate - Targets from explicit inputs
async fn calculate(Json(req): Json<NutritionRequest>) -> Result<Json<NutritionResponse>, ApiError> {
    Ok(Json(ProfileService::calculate(&req)?))
}
