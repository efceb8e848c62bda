//! Workout log repository

use crate::error::{StoreError, StoreResult};
use crate::repositories::UserRepository;
use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Workout entry from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: i64,
    pub user_id: i64,
    pub exercise: String,
    /// Weight lifted in kg
    pub weight: f64,
    pub reps: i32,
    pub date: NaiveDate,
}

/// Input for logging one set
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub exercise: String,
    pub weight: f64,
    pub reps: i32,
    pub date: NaiveDate,
}

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Append an entry for the named user.
    ///
    /// The owner is resolved inside the insert, so an unknown username
    /// inserts nothing and reports `NotFound`.
    pub async fn create_for_username(
        pool: &SqlitePool,
        username: &str,
        input: &CreateWorkout,
    ) -> StoreResult<WorkoutRecord> {
        sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, exercise, weight, reps, date)
            SELECT id, ?, ?, ?, ?
            FROM users
            WHERE username = ?
            RETURNING id, user_id, exercise, weight, reps, date
            "#,
        )
        .bind(&input.exercise)
        .bind(input.weight)
        .bind(input.reps)
        .bind(input.date)
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("User '{}' not found", username)))
    }

    /// All entries for the named user in the order they were logged
    pub async fn list_for_username(
        pool: &SqlitePool,
        username: &str,
    ) -> StoreResult<Vec<WorkoutRecord>> {
        let user_id = UserRepository::id_for_username(pool, username).await?;

        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, exercise, weight, reps, date
            FROM workouts
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Number of entries ever logged by a user
    pub async fn count_for_user(pool: &SqlitePool, user_id: i64) -> StoreResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workouts WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory_pool;

    fn squat(day: u32) -> CreateWorkout {
        CreateWorkout {
            exercise: "Squat".to_string(),
            weight: 100.0,
            reps: 5,
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_entries_come_back_in_logged_order() {
        let pool = in_memory_pool().await.unwrap();
        let user = UserRepository::create(&pool, "alice", "hash").await.unwrap();

        // Later date logged first; order follows insertion, not date
        WorkoutRepository::create_for_username(&pool, "alice", &squat(10)).await.unwrap();
        let mut bench = squat(3);
        bench.exercise = "Bench".to_string();
        bench.weight = 62.5;
        WorkoutRepository::create_for_username(&pool, "alice", &bench).await.unwrap();

        let entries = WorkoutRepository::list_for_username(&pool, "alice").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].exercise, "Squat");
        assert_eq!(entries[1].exercise, "Bench");
        assert_eq!(entries[1].weight, 62.5);
        assert_eq!(entries[1].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(entries.iter().all(|e| e.user_id == user.id));
        assert_eq!(WorkoutRepository::count_for_user(&pool, user.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_user_without_entries_gets_empty_list() {
        let pool = in_memory_pool().await.unwrap();
        let user = UserRepository::create(&pool, "alice", "hash").await.unwrap();

        let entries = WorkoutRepository::list_for_username(&pool, "alice").await.unwrap();
        assert!(entries.is_empty());
        assert_eq!(WorkoutRepository::count_for_user(&pool, user.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let pool = in_memory_pool().await.unwrap();

        let err = WorkoutRepository::create_for_username(&pool, "ghost", &squat(1))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(matches!(
            WorkoutRepository::list_for_username(&pool, "ghost").await,
            Err(StoreError::NotFound(_))
        ));

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }
}
