//! Workout service - progress logging, export and progression suggestions

use crate::error::ApiError;
use crate::repositories::{CreateWorkout, WorkoutRecord, WorkoutRepository};
use chrono::NaiveDate;
use ru_active_shared::types::{
    LogWorkoutRequest, ProgressionRequest, ProgressionResponse, WorkoutEntryResponse,
};
use ru_active_shared::validation::{
    get_field_display_label, validate_exercise_name, validate_workout_date,
};
use ru_active_shared::{progression_table, suggest_progression};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;
use validator::Validate;

/// One CSV row of the progress export
#[derive(Debug, Serialize)]
struct ProgressCsvRow {
    date: String,
    exercise: String,
    weight_kg: f64,
    reps: i32,
}

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// Append one logged set to the user's history
    pub async fn log_workout(
        pool: &SqlitePool,
        username: &str,
        req: LogWorkoutRequest,
        today: NaiveDate,
    ) -> Result<WorkoutEntryResponse, ApiError> {
        req.validate()?;
        validate_exercise_name(&req.exercise).map_err(|msg| field_error("exercise", msg))?;
        validate_workout_date(req.date, today).map_err(|msg| field_error("date", msg))?;

        let input = CreateWorkout {
            exercise: req.exercise.trim().to_string(),
            weight: req.weight,
            reps: req.reps,
            date: req.date,
        };
        let record = WorkoutRepository::create_for_username(pool, username, &input).await?;

        metrics::counter!("ru_active_workouts_logged_total").increment(1);
        debug!(entry_id = record.id, "Workout logged");
        Ok(to_response(record))
    }

    /// The user's full history in logging order
    pub async fn list_progress(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Vec<WorkoutEntryResponse>, ApiError> {
        let records = WorkoutRepository::list_for_username(pool, username).await?;
        Ok(records.into_iter().map(to_response).collect())
    }

    /// The user's history as CSV with a header row
    pub async fn export_progress_csv(pool: &SqlitePool, username: &str) -> Result<String, ApiError> {
        let records = WorkoutRepository::list_for_username(pool, username).await?;

        let rows: Vec<ProgressCsvRow> = records
            .into_iter()
            .map(|r| ProgressCsvRow {
                date: r.date.format("%Y-%m-%d").to_string(),
                exercise: r.exercise,
                weight_kg: r.weight,
                reps: r.reps,
            })
            .collect();

        to_csv(&rows)
    }

    /// Next week's targets for one exercise
    pub fn progression(req: &ProgressionRequest) -> Result<ProgressionResponse, ApiError> {
        req.validate()?;

        let suggestion = suggest_progression(req.current_weight, req.current_reps, req.current_sets);
        let table = progression_table(
            req.current_weight,
            req.current_reps,
            req.current_sets,
            &suggestion,
        );
        Ok(ProgressionResponse { suggestion, table })
    }
}

fn to_response(record: WorkoutRecord) -> WorkoutEntryResponse {
    WorkoutEntryResponse {
        id: record.id,
        exercise: record.exercise,
        weight: record.weight,
        reps: record.reps,
        date: record.date,
    }
}

fn field_error(field: &str, msg: String) -> ApiError {
    ApiError::Validation(format!("{}: {}", get_field_display_label(field), msg))
}

/// Serialize rows with a header, even when there are none
fn to_csv(rows: &[ProgressCsvRow]) -> Result<String, ApiError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    if rows.is_empty() {
        wtr.write_record(["date", "exercise", "weight_kg", "reps"])
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
    }
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
}
