//! Domain enums shared by the calculators, the API and storage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Regular exercise
    Active,
    /// Hard daily training or a physical job
    #[serde(alias = "very active")]
    VeryActive,
}

impl ActivityLevel {
    /// Map a free-form label onto an activity level.
    ///
    /// Anything that is not `sedentary` or `active` counts as very active.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "active" => ActivityLevel::Active,
            _ => ActivityLevel::VeryActive,
        }
    }

    /// Canonical storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Active => 1.55,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    MuscleGain,
    WeightLoss,
    #[default]
    Maintenance,
}

impl FitnessGoal {
    /// Map a free-form label onto a goal; unknown labels mean maintenance.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "muscle_gain" => FitnessGoal::MuscleGain,
            "weight_loss" => FitnessGoal::WeightLoss,
            _ => FitnessGoal::Maintenance,
        }
    }

    /// Canonical storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::Maintenance => "maintenance",
        }
    }

    /// Daily calorie adjustment on top of maintenance
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            FitnessGoal::MuscleGain => 500.0,
            FitnessGoal::WeightLoss => -500.0,
            FitnessGoal::Maintenance => 0.0,
        }
    }

    /// Grams of protein per pound of body weight
    pub fn protein_per_pound(&self) -> f64 {
        match self {
            FitnessGoal::WeightLoss => 1.2,
            FitnessGoal::MuscleGain | FitnessGoal::Maintenance => 1.0,
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
