//! Badge service

use crate::error::ApiError;
use crate::repositories::{BadgeRecord, BadgeRepository};
use ru_active_shared::types::{BadgeResponse, CheckBadgesResponse};
use sqlx::SqlitePool;
use tracing::info;

pub struct BadgeService;

impl BadgeService {
    /// Badges the user has been awarded, one entry per award
    pub async fn user_badges(pool: &SqlitePool, user_id: i64) -> Result<Vec<BadgeResponse>, ApiError> {
        let badges = BadgeRepository::for_user(pool, user_id).await?;
        Ok(badges.into_iter().map(to_response).collect())
    }

    pub async fn catalog(pool: &SqlitePool) -> Result<Vec<BadgeResponse>, ApiError> {
        let badges = BadgeRepository::catalog(pool).await?;
        Ok(badges.into_iter().map(to_response).collect())
    }

    /// Run the achievement check and return the user's badges afterwards
    pub async fn check(pool: &SqlitePool, user_id: i64) -> Result<CheckBadgesResponse, ApiError> {
        let outcome = BadgeRepository::check_and_award(pool, user_id).await?;

        if !outcome.awarded.is_empty() {
            metrics::counter!("ru_active_badges_awarded_total")
                .increment(outcome.awarded.len() as u64);
            info!(user_id, awarded = ?outcome.awarded, "Badges awarded");
        }

        Ok(CheckBadgesResponse {
            workout_count: outcome.workout_count,
            awarded: outcome.awarded,
            badges: Self::user_badges(pool, user_id).await?,
        })
    }
}

fn to_response(record: BadgeRecord) -> BadgeResponse {
    BadgeResponse {
        name: record.name,
        description: record.description,
    }
}
