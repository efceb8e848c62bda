//! Daily nutrition target calculation
//!
//! Targets come from the Mifflin-St Jeor BMR scaled by activity, shifted by
//! the training goal, then split into macros:
//!
//! - BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age + 5
//! - carbohydrates supply 50% of calories at 4 kcal/g
//! - fat supplies 25% of calories at 9 kcal/g
//!
//! There is no sex input, so the male constant (+5) is always used. Inputs
//! are not validated here; callers check ranges before calling.

use crate::models::{ActivityLevel, FitnessGoal};
use crate::units::{HeightUnit, WeightUnit};
use serde::{Deserialize, Serialize};

/// Share of calories taken from carbohydrates
pub const CARB_CALORIE_SHARE: f64 = 0.5;
/// Share of calories taken from fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;
/// Energy density of carbohydrates (kcal/g)
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Suggested daily intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: i64,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
}

/// One named row of the intake table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientAmount {
    pub nutrient: String,
    pub suggested_intake: i64,
}

impl NutritionTargets {
    /// Targets as a fixed-order table: calories, protein, carbohydrates, fats
    pub fn breakdown(&self) -> Vec<NutrientAmount> {
        [
            ("Calories (kcal)", self.calories),
            ("Protein (g)", self.protein_grams),
            ("Carbohydrates (g)", self.carb_grams),
            ("Fats (g)", self.fat_grams),
        ]
        .into_iter()
        .map(|(nutrient, suggested_intake)| NutrientAmount {
            nutrient: nutrient.to_string(),
            suggested_intake,
        })
        .collect()
    }
}

/// Basal metabolic rate with the fixed male offset
pub fn basal_metabolic_rate(height_cm: f64, weight_kg: f64, age: i32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + 5.0
}

/// Compute daily calorie and macro targets from imperial body measurements.
pub fn compute_nutrition(
    height_inches: f64,
    weight_pounds: f64,
    age: i32,
    activity_level: ActivityLevel,
    goal: FitnessGoal,
) -> NutritionTargets {
    let height_cm = HeightUnit::Inches.to_cm(height_inches);
    let weight_kg = WeightUnit::Lbs.to_kg(weight_pounds);

    let bmr = basal_metabolic_rate(height_cm, weight_kg, age);
    let calories = bmr * activity_level.multiplier() + goal.calorie_adjustment();
    let protein = weight_pounds * goal.protein_per_pound();

    // Macros are derived from the unrounded calorie figure
    let carbs = calories * CARB_CALORIE_SHARE / KCAL_PER_GRAM_CARB;
    let fats = calories * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT;

    NutritionTargets {
        calories: round_half_even(calories),
        protein_grams: round_half_even(protein),
        carb_grams: round_half_even(carbs),
        fat_grams: round_half_even(fats),
    }
}

fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
