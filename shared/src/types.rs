//! API request and response types

use crate::models::{ActivityLevel, FitnessGoal};
use crate::nutrition::{NutrientAmount, NutritionTargets};
use crate::progression::{ProgressionRow, ProgressionSuggestion};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Authentication Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request; checked by `validation::validate_username` and
/// `validation::validate_password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Account summary for the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
    pub created_at: NaiveDateTime,
}

// ============================================================================
// Profile and Nutrition Types
// ============================================================================

/// Body metrics and preferences; every field is empty until the first edit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: i64,
    pub username: String,
    /// Height in inches
    pub height: Option<f64>,
    /// Body weight in pounds
    pub weight: Option<f64>,
    pub age: Option<i32>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<FitnessGoal>,
}

/// Full overwrite of the profile fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Height in inches
    #[validate(range(exclusive_min = 0.0, max = 120.0))]
    pub height: f64,
    /// Body weight in pounds
    #[validate(range(exclusive_min = 0.0, max = 1500.0))]
    pub weight: f64,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
}

/// Explicit calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NutritionRequest {
    #[validate(range(exclusive_min = 0.0, max = 120.0))]
    pub height_inches: f64,
    #[validate(range(exclusive_min = 0.0, max = 1500.0))]
    pub weight_pounds: f64,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: FitnessGoal,
}

/// Suggested daily intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionResponse {
    pub targets: NutritionTargets,
    pub breakdown: Vec<NutrientAmount>,
    /// Profile fields that were unset and replaced with a default
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaults_applied: Vec<String>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Last session's numbers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProgressionRequest {
    /// Weight lifted in kg
    #[validate(range(min = 0.0, max = 1000.0))]
    pub current_weight: f64,
    #[validate(range(max = 1000))]
    pub current_reps: u32,
    #[validate(range(min = 1, max = 5))]
    pub current_sets: u32,
}

/// Next week's targets plus the comparison table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionResponse {
    pub suggestion: ProgressionSuggestion,
    pub table: Vec<ProgressionRow>,
}

/// One logged set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogWorkoutRequest {
    #[validate(length(min = 1, max = 100))]
    pub exercise: String,
    /// Weight lifted in kg
    #[validate(range(min = 0.0, max = 1000.0))]
    pub weight: f64,
    #[validate(range(min = 0, max = 1000))]
    pub reps: i32,
    pub date: NaiveDate,
}

/// Workout log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntryResponse {
    pub id: i64,
    pub exercise: String,
    pub weight: f64,
    pub reps: i32,
    pub date: NaiveDate,
}

// ============================================================================
// Badge and Social Types
// ============================================================================

/// Badge as shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeResponse {
    pub name: String,
    pub description: String,
}

/// Result of an achievement check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckBadgesResponse {
    pub workout_count: i64,
    pub awarded: Vec<String>,
    pub badges: Vec<BadgeResponse>,
}

/// Add-friend request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFriendRequest {
    pub username: String,
}

/// Friend list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsResponse {
    pub friends: Vec<String>,
}

/// Workout tally for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutCount {
    pub username: String,
    pub workout_count: i64,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub workouts_this_week: i64,
}

/// Leaderboard for the trailing window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub window_start: NaiveDate,
    pub entries: Vec<LeaderboardEntry>,
}
