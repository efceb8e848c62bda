//! Badge catalog and award repository

use crate::error::StoreResult;
use crate::repositories::WorkoutRepository;
use sqlx::SqlitePool;

/// Badge awarded once a user has logged this many workouts
pub const WORKOUT_BADGE_THRESHOLD: i64 = 10;

/// Name of the workout-count badge seeded by the initial migration
pub const TEN_WORKOUTS_BADGE: &str = "10 Workouts Completed";

/// Badge name and description
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BadgeRecord {
    pub name: String,
    pub description: String,
}

/// Outcome of an achievement check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeCheck {
    pub workout_count: i64,
    pub awarded: Vec<String>,
}

/// Badge repository for database operations
pub struct BadgeRepository;

impl BadgeRepository {
    /// Award the named badge to a user.
    ///
    /// Returns false and writes nothing when no badge has that name.
    pub async fn award(pool: &SqlitePool, user_id: i64, badge_name: &str) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_badges (user_id, badge_id)
            SELECT ?, id
            FROM badges
            WHERE name = ?
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(badge_name)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Award every badge whose condition the user currently meets.
    ///
    /// Not idempotent: each qualifying check adds another award row.
    pub async fn check_and_award(pool: &SqlitePool, user_id: i64) -> StoreResult<BadgeCheck> {
        let workout_count = WorkoutRepository::count_for_user(pool, user_id).await?;

        let mut awarded = Vec::new();
        if workout_count >= WORKOUT_BADGE_THRESHOLD
            && Self::award(pool, user_id, TEN_WORKOUTS_BADGE).await?
        {
            awarded.push(TEN_WORKOUTS_BADGE.to_string());
        }

        Ok(BadgeCheck {
            workout_count,
            awarded,
        })
    }

    /// One entry per award row, oldest first
    pub async fn for_user(pool: &SqlitePool, user_id: i64) -> StoreResult<Vec<BadgeRecord>> {
        let badges = sqlx::query_as::<_, BadgeRecord>(
            r#"
            SELECT b.name, b.description
            FROM user_badges ub
            JOIN badges b ON b.id = ub.badge_id
            WHERE ub.user_id = ?
            ORDER BY ub.rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(badges)
    }

    /// Every badge that can be earned
    pub async fn catalog(pool: &SqlitePool) -> StoreResult<Vec<BadgeRecord>> {
        let badges = sqlx::query_as::<_, BadgeRecord>(
            "SELECT name, description FROM badges ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(badges)
    }
}
