// ABOUTME: Core domain types for profiles and plan documents
// ABOUTME: Profile input contract, categorical enums, and the three plan texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Domain Models
//!
//! Profile input (validated once, immutable afterwards), the categorical
//! enumerations it carries, and the free-text plan documents owned by a
//! session. Plan documents have no structure beyond line-oriented text; the
//! patcher works directly on that representation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Input contract boundaries for profile fields
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 16..=100;
/// Valid weight range in kilograms
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<f64> = 30.0..=200.0;
/// Valid height range in centimeters
pub const HEIGHT_RANGE_CM: std::ops::RangeInclusive<f64> = 100.0..=250.0;

/// Gender category used to select the BMR formula constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male formula constant (+5)
    Male,
    /// Female formula constant (-161)
    Female,
    /// Any other stated gender; maps to the female formula constant
    Other,
}

impl Gender {
    /// Parse a user-facing label. Anything that is not recognizably
    /// "male" or "female" becomes [`Gender::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Activity level for TDEE calculation (five fixed levels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (x1.2)
    Sedentary,
    /// Light exercise 1-3 days/week (x1.375)
    LightlyActive,
    /// Moderate exercise 3-5 days/week (x1.55)
    ModeratelyActive,
    /// Hard exercise 6-7 days/week (x1.725)
    VeryActive,
    /// Very hard exercise and a physical job (x1.9)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse a user-facing label.
    ///
    /// Unrecognized labels fall back to [`ActivityLevel::Sedentary`]; this
    /// fail-open default is the documented policy for free-form activity
    /// input, not an error path.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lightly active" | "lightly_active" => Self::LightlyActive,
            "moderately active" | "moderately_active" => Self::ModeratelyActive,
            "very active" | "very_active" => Self::VeryActive,
            "extra active" | "extra_active" => Self::ExtraActive,
            _ => Self::Sedentary,
        }
    }

    /// TDEE multiplier for this activity level
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtraActive => "Extra Active",
        };
        f.write_str(label)
    }
}

/// Primary fitness goal driving the macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit (-500 kcal/day, 2.2 g/kg protein)
    LoseWeight,
    /// Caloric surplus (+300 kcal/day, 2.2 g/kg protein)
    BuildMuscle,
    /// Treated as maintenance for energy purposes
    ImproveFitness,
    /// Caloric balance (1.8 g/kg protein)
    MaintainWeight,
}

impl Goal {
    /// Parse a user-facing label. Unknown goals map to
    /// [`Goal::MaintainWeight`] (maintenance is the neutral policy).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lose weight" | "lose_weight" => Self::LoseWeight,
            "build muscle" | "build_muscle" => Self::BuildMuscle,
            "improve fitness" | "improve_fitness" => Self::ImproveFitness,
            _ => Self::MaintainWeight,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::LoseWeight => "Lose Weight",
            Self::BuildMuscle => "Build Muscle",
            Self::ImproveFitness => "Improve Fitness",
            Self::MaintainWeight => "Maintain Weight",
        };
        f.write_str(label)
    }
}

/// A validated user profile, immutable once constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years (16-100)
    pub age: u32,
    /// Gender category
    pub gender: Gender,
    /// Body weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Primary fitness goal
    pub goal: Goal,
    /// Free-form preference tags, e.g. "Vegetarian", "No Gym Access"
    pub preferences: Vec<String>,
}

impl Profile {
    /// Construct a profile, enforcing the numeric input contract.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ValueOutOfRange`] when age,
    /// weight, or height fall outside their documented ranges.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
        goal: Goal,
        preferences: Vec<String>,
    ) -> AppResult<Self> {
        if !AGE_RANGE.contains(&age) {
            return Err(AppError::out_of_range(format!(
                "age must be between {} and {} years",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
        if !WEIGHT_RANGE_KG.contains(&weight_kg) {
            return Err(AppError::out_of_range(format!(
                "weight must be between {} and {} kg",
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end()
            )));
        }
        if !HEIGHT_RANGE_CM.contains(&height_cm) {
            return Err(AppError::out_of_range(format!(
                "height must be between {} and {} cm",
                HEIGHT_RANGE_CM.start(),
                HEIGHT_RANGE_CM.end()
            )));
        }

        Ok(Self {
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level,
            goal,
            preferences,
        })
    }

    /// Preference tags joined for prompt interpolation
    #[must_use]
    pub fn preferences_label(&self) -> String {
        if self.preferences.is_empty() {
            "None".to_owned()
        } else {
            self.preferences.join(", ")
        }
    }
}

/// Which of the three plan documents a modification targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// The workout plan document
    Workout,
    /// The nutrition plan document
    Nutrition,
    /// The combined weekly schedule document
    Schedule,
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Workout => "workout",
            Self::Nutrition => "nutrition",
            Self::Schedule => "schedule",
        };
        f.write_str(label)
    }
}

/// The three free-text plan documents owned by a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSet {
    /// Workout plan text
    pub workout: String,
    /// Nutrition plan text
    pub nutrition: String,
    /// Weekly schedule text
    pub schedule: String,
}

impl PlanSet {
    /// Borrow the document for a plan kind
    #[must_use]
    pub fn get(&self, kind: PlanKind) -> &str {
        match kind {
            PlanKind::Workout => &self.workout,
            PlanKind::Nutrition => &self.nutrition,
            PlanKind::Schedule => &self.schedule,
        }
    }

    /// Mutably borrow the document for a plan kind
    pub fn get_mut(&mut self, kind: PlanKind) -> &mut String {
        match kind {
            PlanKind::Workout => &mut self.workout,
            PlanKind::Nutrition => &mut self.nutrition,
            PlanKind::Schedule => &mut self.schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_profile_validation_bounds() {
        let ok = Profile::new(
            30,
            Gender::Male,
            70.0,
            175.0,
            ActivityLevel::Sedentary,
            Goal::MaintainWeight,
            vec![],
        );
        assert!(ok.is_ok());

        for (age, weight, height) in [
            (15, 70.0, 175.0),
            (101, 70.0, 175.0),
            (30, 29.9, 175.0),
            (30, 200.5, 175.0),
            (30, 70.0, 99.0),
            (30, 70.0, 251.0),
        ] {
            let result = Profile::new(
                age,
                Gender::Female,
                weight,
                height,
                ActivityLevel::Sedentary,
                Goal::MaintainWeight,
                vec![],
            );
            assert!(result.is_err(), "expected rejection for {age}/{weight}/{height}");
        }
    }

    #[test]
    fn test_activity_level_fallback_is_sedentary() {
        assert_eq!(ActivityLevel::from_label("Moderately Active"), ActivityLevel::ModeratelyActive);
        assert_eq!(ActivityLevel::from_label("couch potato"), ActivityLevel::Sedentary);
        // Idempotent across repeated calls
        assert_eq!(ActivityLevel::from_label("couch potato"), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_goal_fallback_is_maintenance() {
        assert_eq!(Goal::from_label("Lose Weight"), Goal::LoseWeight);
        assert_eq!(Goal::from_label("get shredded"), Goal::MaintainWeight);
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label("female"), Gender::Female);
        assert_eq!(Gender::from_label("non-binary"), Gender::Other);
    }

    #[test]
    fn test_preferences_label() {
        let profile = Profile::new(
            30,
            Gender::Male,
            70.0,
            175.0,
            ActivityLevel::Sedentary,
            Goal::MaintainWeight,
            vec!["Vegetarian".to_owned(), "No Gym Access".to_owned()],
        )
        .unwrap();
        assert_eq!(profile.preferences_label(), "Vegetarian, No Gym Access");
    }
}
