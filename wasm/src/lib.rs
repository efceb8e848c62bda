//! RU Active WASM Module
//!
//! Browser bindings for the nutrition and progression calculators, so the
//! client can preview suggestions without a round trip.

use ru_active_shared::{compute_nutrition, suggest_progression, ActivityLevel, FitnessGoal};
use wasm_bindgen::prelude::*;

/// Daily targets as `[calories, protein_g, carbs_g, fats_g]`
///
/// Labels are matched leniently: unknown activity levels count as very
/// active and unknown goals as maintenance.
#[wasm_bindgen]
pub fn nutrition_targets(
    height_inches: f64,
    weight_pounds: f64,
    age: i32,
    activity_level: &str,
    goal: &str,
) -> Vec<i64> {
    let targets = compute_nutrition(
        height_inches,
        weight_pounds,
        age,
        ActivityLevel::from_label(activity_level),
        FitnessGoal::from_label(goal),
    );
    vec![
        targets.calories,
        targets.protein_grams,
        targets.carb_grams,
        targets.fat_grams,
    ]
}

/// Next week's targets as `[weight, reps, sets]`
#[wasm_bindgen]
pub fn progression_suggestion(current_weight: f64, current_reps: u32, current_sets: u32) -> Vec<f64> {
    let s = suggest_progression(current_weight, current_reps, current_sets);
    vec![s.next_weight, s.next_reps as f64, s.next_sets as f64]
}
