//! Profile service - body metrics and the nutrition suggestions built on them

use crate::error::ApiError;
use crate::repositories::{ProfileRecord, UpdateProfile, UserRepository};
use ru_active_shared::types::{
    NutritionRequest, NutritionResponse, UpdateProfileRequest, UserProfileResponse,
};
use ru_active_shared::{compute_nutrition, ActivityLevel, FitnessGoal};
use sqlx::SqlitePool;
use validator::Validate;

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get user profile
    pub async fn get_profile(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<UserProfileResponse, ApiError> {
        let profile = UserRepository::get_profile(pool, username).await?;
        Ok(to_response(profile))
    }

    /// Overwrite the profile and return what was stored
    pub async fn update_profile(
        pool: &SqlitePool,
        username: &str,
        req: UpdateProfileRequest,
    ) -> Result<UserProfileResponse, ApiError> {
        req.validate()?;

        let update = UpdateProfile {
            height: req.height,
            weight: req.weight,
            age: req.age,
            activity_level: req.activity_level,
            goal: req.goal,
        };
        UserRepository::update_profile(pool, username, &update).await?;

        Self::get_profile(pool, username).await
    }

    /// Daily targets from the stored profile
    pub async fn nutrition_suggestion(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<NutritionResponse, ApiError> {
        let profile = UserRepository::get_profile(pool, username).await?;
        Ok(suggestion_for_profile(&profile))
    }

    /// Daily targets from explicit inputs
    pub fn calculate(req: &NutritionRequest) -> Result<NutritionResponse, ApiError> {
        req.validate()?;

        let targets = compute_nutrition(
            req.height_inches,
            req.weight_pounds,
            req.age,
            req.activity_level,
            req.goal,
        );
        Ok(NutritionResponse {
            targets,
            breakdown: targets.breakdown(),
            defaults_applied: Vec::new(),
        })
    }
}

/// Run the calculator over a possibly incomplete profile.
///
/// Unset numbers count as zero, an unset activity level as sedentary and an
/// unset goal as maintenance. Every substitution is named in
/// `defaults_applied`.
pub fn suggestion_for_profile(profile: &ProfileRecord) -> NutritionResponse {
    let mut defaults_applied = Vec::new();
    let mut note = |field: &str| defaults_applied.push(field.to_string());

    let height = profile.height.unwrap_or_else(|| {
        note("height");
        0.0
    });
    let weight = profile.weight.unwrap_or_else(|| {
        note("weight");
        0.0
    });
    let age = profile.age.unwrap_or_else(|| {
        note("age");
        0
    });
    let activity_level = profile.activity_level().unwrap_or_else(|| {
        note("activity_level");
        ActivityLevel::Sedentary
    });
    let goal = profile.goal().unwrap_or_else(|| {
        note("goal");
        FitnessGoal::Maintenance
    });

    let targets = compute_nutrition(height, weight, age, activity_level, goal);
    NutritionResponse {
        targets,
        breakdown: targets.breakdown(),
        defaults_applied,
    }
}

fn to_response(profile: ProfileRecord) -> UserProfileResponse {
    UserProfileResponse {
        activity_level: profile.activity_level(),
        goal: profile.goal(),
        id: profile.id,
        username: profile.username,
        height: profile.height,
        weight: profile.weight,
        age: profile.age,
    }
}
