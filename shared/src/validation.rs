//! Input validation functions
//!
//! Numeric ranges live on the request types (`validator` derives). Account
//! credentials and workout entries are checked here.

use chrono::NaiveDate;
use regex_lite::Regex;
use std::sync::OnceLock;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,32}$").expect("valid username regex"))
}

/// Validate a username: 3-32 letters, digits, `_`, `.` or `-`
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if !username_pattern().is_match(username) {
        return Err(
            "Username must be 3-32 characters of letters, digits, '_', '.' or '-'".to_string(),
        );
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    let length = password.chars().count();
    if length < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if length > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate an exercise name (non-blank after trimming)
pub fn validate_exercise_name(exercise: &str) -> Result<(), String> {
    if exercise.trim().is_empty() {
        return Err("Exercise name cannot be blank".to_string());
    }
    Ok(())
}

/// Validate a workout date: no logging in the future
pub fn validate_workout_date(date: NaiveDate, today: NaiveDate) -> Result<(), String> {
    if date > today {
        return Err("Workout date cannot be in the future".to_string());
    }
    Ok(())
}

/// Get display label for a field name
pub fn get_field_display_label(field: &str) -> &'static str {
    match field {
        "username" => "Username",
        "password" => "Password",
        "height" | "height_inches" => "Height",
        "weight" | "weight_pounds" => "Weight",
        "age" => "Age",
        "exercise" => "Exercise",
        "reps" | "current_reps" => "Reps",
        "current_sets" => "Sets",
        "current_weight" => "Weight lifted",
        "date" => "Date",
        _ => "Field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob_smith-99").is_ok());
        assert!(validate_username("j.doe").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("emoji🏋").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // four characters, eight bytes
        assert!(validate_password("ääää").is_err());
        assert!(validate_password(&"ä".repeat(8)).is_ok());
        assert!(validate_password(&"ä".repeat(128)).is_ok());
        assert!(validate_password(&"ä".repeat(129)).is_err());
    }

    #[test]
    fn test_exercise_name() {
        assert!(validate_exercise_name("Bench Press").is_ok());
        assert!(validate_exercise_name("  ").is_err());
    }

    #[test]
    fn test_workout_date_not_in_future() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(validate_workout_date(today, today).is_ok());
        assert!(validate_workout_date(today.pred_opt().unwrap(), today).is_ok());
        assert!(validate_workout_date(today.succ_opt().unwrap(), today).is_err());
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(get_field_display_label("height"), "Height");
        assert_eq!(get_field_display_label("current_sets"), "Sets");
        assert_eq!(get_field_display_label("unknown"), "Field");
    }
}
