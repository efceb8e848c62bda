//! User profile API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use ru_active_shared::types::{UpdateProfileRequest, UserProfileResponse};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Get user profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = ProfileService::get_profile(state.db(), &auth.username).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile - Replace body metrics and preferences
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let profile = ProfileService::update_profile(state.db(), &auth.username, req).await?;
    Ok(Json(profile))
}
