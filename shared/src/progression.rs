//! Progressive overload suggestions
//!
//! Rules for next week, applied to last session's numbers:
//! 1. At 8+ reps the weight goes up 5% and reps hold; otherwise weight holds
//!    and reps go up by one.
//! 2. Sets climb by one until they reach 3.
//!
//! The two rules never interact.

use serde::{Deserialize, Serialize};

/// Reps at which the weight is increased instead of the reps
pub const REP_THRESHOLD: u32 = 8;
/// Multiplier applied to the weight once the rep threshold is met
pub const WEIGHT_INCREASE_FACTOR: f64 = 1.05;
/// Set count at which sets stop increasing
pub const TARGET_SETS: u32 = 3;

/// Suggested targets for next week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSuggestion {
    pub next_weight: f64,
    pub next_reps: u32,
    pub next_sets: u32,
}

/// One row of the "current vs next week" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRow {
    pub metric: String,
    pub current: f64,
    pub next_week: f64,
}

/// Suggest next week's weight, reps and sets.
pub fn suggest_progression(
    current_weight: f64,
    current_reps: u32,
    current_sets: u32,
) -> ProgressionSuggestion {
    let (next_weight, next_reps) = if current_reps >= REP_THRESHOLD {
        (round_to_cents(current_weight * WEIGHT_INCREASE_FACTOR), current_reps)
    } else {
        (current_weight, current_reps.saturating_add(1))
    };

    let next_sets = if current_sets >= TARGET_SETS {
        current_sets
    } else {
        current_sets + 1
    };

    ProgressionSuggestion {
        next_weight,
        next_reps,
        next_sets,
    }
}

/// Side-by-side table of the current session and the suggestion
pub fn progression_table(
    current_weight: f64,
    current_reps: u32,
    current_sets: u32,
    suggestion: &ProgressionSuggestion,
) -> Vec<ProgressionRow> {
    vec![
        ProgressionRow {
            metric: "Weight (kg)".to_string(),
            current: current_weight,
            next_week: suggestion.next_weight,
        },
        ProgressionRow {
            metric: "Reps".to_string(),
            current: current_reps as f64,
            next_week: suggestion.next_reps as f64,
        },
        ProgressionRow {
            metric: "Sets".to_string(),
            current: current_sets as f64,
            next_week: suggestion.next_sets as f64,
        },
    ]
}

/// Round to two decimals from the exact binary value; scaling by 100 first
/// can produce a `.5` tie the double never held (100.5 * 1.05 > 105.525).
fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
