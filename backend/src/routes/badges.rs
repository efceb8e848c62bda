//! Badge API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::BadgeService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use ru_active_shared::types::{BadgeResponse, CheckBadgesResponse};

/// Create badge routes
pub fn badge_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_badges))
        .route("/catalog", get(catalog))
        .route("/check", post(check_badges))
}

/// GET /api/v1/badges - Badges awarded to the caller
async fn list_badges(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<BadgeResponse>>, ApiError> {
    Ok(Json(BadgeService::user_badges(state.db(), auth.user_id).await?))
}

/// GET /api/v1/badges/catalog
async fn catalog(State(state): State<AppState>) -> Result<Json<Vec<BadgeResponse>>, ApiError> {
    Ok(Json(BadgeService::catalog(state.db()).await?))
}

/// POST /api/v1/badges/check - Award any badges the caller now qualifies for
async fn check_badges(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CheckBadgesResponse>, ApiError> {
    Ok(Json(BadgeService::check(state.db(), auth.user_id).await?))
}
