//! Friend links and the social read models built on them

use crate::error::{StoreError, StoreResult};
use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Username with a workout count
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct WorkoutCountRecord {
    pub username: String,
    pub workout_count: i64,
}

/// Friend repository for database operations
pub struct FriendRepository;

impl FriendRepository {
    /// Add a directed link from `user_id` to the named user
    pub async fn add(pool: &SqlitePool, user_id: i64, friend_username: &str) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO friends (user_id, friend_id)
            SELECT ?, id
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(user_id)
        .bind(friend_username)
        .execute(pool)
        .await
        .map_err(|e| {
            if StoreError::is_unique_violation(&e) {
                StoreError::AlreadyFriends(friend_username.to_string())
            } else {
                StoreError::Database(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::UnknownFriend(friend_username.to_string()));
        }
        Ok(())
    }

    /// Usernames this user has added, in the order they were added
    pub async fn friends(pool: &SqlitePool, user_id: i64) -> StoreResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT u.username
            FROM friends f
            JOIN users u ON u.id = f.friend_id
            WHERE f.user_id = ?
            ORDER BY f.rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(names)
    }

    /// All-time workout count of each friend, zero for friends who never logged
    pub async fn friend_workout_counts(
        pool: &SqlitePool,
        user_id: i64,
    ) -> StoreResult<Vec<WorkoutCountRecord>> {
        let counts = sqlx::query_as::<_, WorkoutCountRecord>(
            r#"
            SELECT u.username, COUNT(w.id) AS workout_count
            FROM friends f
            JOIN users u ON u.id = f.friend_id
            LEFT JOIN workouts w ON w.user_id = u.id
            WHERE f.user_id = ?
            GROUP BY u.id, u.username
            ORDER BY u.username
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }

    /// The user and their friends ranked by workouts dated on or after `since`.
    ///
    /// The date bound sits in the join so participants with no recent
    /// workouts still appear with a count of zero. Equal counts are ordered
    /// by username.
    pub async fn leaderboard(
        pool: &SqlitePool,
        user_id: i64,
        since: NaiveDate,
    ) -> StoreResult<Vec<WorkoutCountRecord>> {
        let rows = sqlx::query_as::<_, WorkoutCountRecord>(
            r#"
            SELECT u.username, COUNT(w.id) AS workout_count
            FROM users u
            LEFT JOIN workouts w ON w.user_id = u.id AND w.date >= ?
            WHERE u.id = ?
               OR u.id IN (SELECT friend_id FROM friends WHERE user_id = ?)
            GROUP BY u.id, u.username
            ORDER BY workout_count DESC, u.username
            "#,
        )
        .bind(since)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
