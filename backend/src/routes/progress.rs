//! Workout progress API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use ru_active_shared::types::{LogWorkoutRequest, WorkoutEntryResponse};

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_progress).post(log_workout))
        .route("/csv", get(export_csv))
}

/// GET /api/v1/progress - Logged sets in the order they were entered
async fn list_progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<WorkoutEntryResponse>>, ApiError> {
    let entries = WorkoutService::list_progress(state.db(), &auth.username).await?;
    Ok(Json(entries))
}

/// POST /api/v1/progress - Log one set
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutEntryResponse>), ApiError> {
    let today = Utc::now().date_naive();
    let entry = WorkoutService::log_workout(state.db(), &auth.username, req, today).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/progress/csv - Download the history as CSV
async fn export_csv(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let csv = WorkoutService::export_progress_csv(state.db(), &auth.username).await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"workout-progress.csv\""),
    );

    Ok((headers, csv))
}
