//! Friends and leaderboard API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::SocialService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use ru_active_shared::types::{AddFriendRequest, FriendsResponse, LeaderboardResponse, WorkoutCount};

/// Create friend routes
pub fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_friends).post(add_friend))
        .route("/workouts", get(friend_workouts))
}

/// GET /api/v1/friends
async fn list_friends(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<FriendsResponse>, ApiError> {
    let friends = SocialService::friends(state.db(), auth.user_id).await?;
    Ok(Json(FriendsResponse { friends }))
}

/// POST /api/v1/friends - Add a friend by username
async fn add_friend(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddFriendRequest>,
) -> Result<(StatusCode, Json<FriendsResponse>), ApiError> {
    SocialService::add_friend(state.db(), &auth, &req.username).await?;
    let friends = SocialService::friends(state.db(), auth.user_id).await?;
    Ok((StatusCode::CREATED, Json(FriendsResponse { friends })))
}

/// GET /api/v1/friends/workouts - All-time workout totals per friend
async fn friend_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<WorkoutCount>>, ApiError> {
    Ok(Json(
        SocialService::friend_workout_counts(state.db(), auth.user_id).await?,
    ))
}

/// GET /api/v1/leaderboard - Caller and friends ranked over the past week
pub async fn leaderboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let today = Utc::now().date_naive();
    Ok(Json(
        SocialService::leaderboard(state.db(), auth.user_id, today).await?,
    ))
}
