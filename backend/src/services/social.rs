//! Social service - friend links, friend activity and the weekly leaderboard

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{FriendRepository, WorkoutCountRecord};
use chrono::{Duration, NaiveDate};
use ru_active_shared::types::{LeaderboardEntry, LeaderboardResponse, WorkoutCount};
use sqlx::SqlitePool;
use tracing::info;

/// Days counted by the leaderboard, ending today
pub const LEADERBOARD_WINDOW_DAYS: i64 = 7;

/// Social service for friend and leaderboard operations
pub struct SocialService;

impl SocialService {
    /// Follow another user by username
    pub async fn add_friend(
        pool: &SqlitePool,
        user: &AuthUser,
        friend_username: &str,
    ) -> Result<(), ApiError> {
        let friend_username = friend_username.trim();
        if friend_username.is_empty() {
            return Err(ApiError::Validation("Username: cannot be empty".to_string()));
        }
        if friend_username == user.username {
            return Err(ApiError::BadRequest("You cannot add yourself as a friend".to_string()));
        }

        FriendRepository::add(pool, user.user_id, friend_username).await?;

        metrics::counter!("ru_active_friends_added_total").increment(1);
        info!(user_id = user.user_id, "Friend added");
        Ok(())
    }

    pub async fn friends(pool: &SqlitePool, user_id: i64) -> Result<Vec<String>, ApiError> {
        Ok(FriendRepository::friends(pool, user_id).await?)
    }

    /// All-time workout totals for each friend
    pub async fn friend_workout_counts(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<WorkoutCount>, ApiError> {
        let counts = FriendRepository::friend_workout_counts(pool, user_id).await?;
        Ok(counts
            .into_iter()
            .map(|c| WorkoutCount {
                username: c.username,
                workout_count: c.workout_count,
            })
            .collect())
    }

    /// The user and their friends ranked by workouts in the trailing window
    pub async fn leaderboard(
        pool: &SqlitePool,
        user_id: i64,
        today: NaiveDate,
    ) -> Result<LeaderboardResponse, ApiError> {
        let window_start = leaderboard_window_start(today);
        let rows = FriendRepository::leaderboard(pool, user_id, window_start).await?;

        Ok(LeaderboardResponse {
            window_start,
            entries: rank(rows),
        })
    }
}

/// First day counted by a leaderboard computed on `today`
pub fn leaderboard_window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(LEADERBOARD_WINDOW_DAYS)
}

/// Number rows from 1 in the order given
fn rank(rows: Vec<WorkoutCountRecord>) -> Vec<LeaderboardEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: i + 1,
            username: row.username,
            workouts_this_week: row.workout_count,
        })
        .collect()
}
