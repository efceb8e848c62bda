//! RU Active Shared Library
//!
//! Calculators, domain enums, API types and validation shared by the
//! backend and the WASM module.

pub mod models;
pub mod nutrition;
pub mod progression;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use models::{ActivityLevel, FitnessGoal};
pub use nutrition::{compute_nutrition, NutrientAmount, NutritionTargets};
pub use progression::{progression_table, suggest_progression, ProgressionRow, ProgressionSuggestion};
pub use types::*;
pub use units::{HeightUnit, WeightUnit};
