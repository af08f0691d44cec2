// ABOUTME: Metabolic calculations - BMR, TDEE, and macronutrient targets
// ABOUTME: Mifflin-St Jeor BMR with activity multipliers and goal-based macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Metabolic Calculator
//!
//! Energy-expenditure estimation from a validated profile.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use serde::{Deserialize, Serialize};

use crate::models::{Gender, Goal, Profile};

/// Male additive constant in the Mifflin-St Jeor equation
const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Female additive constant; also used for any non-male gender category
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Daily deficit applied for a weight-loss goal (kcal)
const WEIGHT_LOSS_DEFICIT: f64 = 500.0;
/// Daily surplus applied for a muscle-building goal (kcal)
const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Protein target in g/kg bodyweight for deficit/surplus goals
const PROTEIN_G_PER_KG_ACTIVE_GOAL: f64 = 2.2;
/// Protein target in g/kg bodyweight for maintenance
const PROTEIN_G_PER_KG_MAINTENANCE: f64 = 1.8;
/// Share of adjusted calories allotted to fat
const FAT_CALORIE_SHARE: f64 = 0.25;

/// Energy-expenditure estimate derived from a profile.
///
/// Recomputed per request; carries no persisted identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
}

/// Daily macronutrient targets derived from an estimate and goal.
///
/// The energy identity `protein*4 + fat*9 + carbs*4 == calories` holds
/// exactly (up to floating rounding): carbohydrates absorb whatever the
/// protein and fat allotments leave over, and can therefore go negative for
/// very low adjusted-calorie, high-bodyweight inputs. Callers surface that
/// case as a warning rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Goal-adjusted daily calories
    pub calories: f64,
    /// Daily protein in grams
    pub protein_g: f64,
    /// Daily carbohydrates in grams
    pub carbs_g: f64,
    /// Daily fat in grams
    pub fat_g: f64,
}

/// Estimate basal and activity-adjusted energy expenditure.
///
/// BMR uses the Mifflin-St Jeor equation
/// (`10*weight + 6.25*height - 5*age + constant`); the male category uses
/// +5, female and any other category use -161. TDEE scales BMR by the
/// activity multiplier. Pure and total for any validated profile.
#[must_use]
pub fn estimate(profile: &Profile) -> EnergyEstimate {
    let gender_constant = match profile.gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female | Gender::Other => MSJ_FEMALE_CONSTANT,
    };

    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age)
        + gender_constant;
    let tdee = bmr * profile.activity_level.multiplier();

    EnergyEstimate { bmr, tdee }
}

/// Derive daily macronutrient targets from an estimate, goal, and weight.
///
/// Weight loss subtracts a fixed 500 kcal, muscle building adds 300 kcal,
/// anything else maintains. Protein is 2.2 g/kg for the deficit/surplus
/// goals and 1.8 g/kg for maintenance; fat takes 25% of adjusted calories;
/// carbohydrates absorb the remainder (which may be negative, see
/// [`MacroTargets`]).
#[must_use]
pub fn macros(energy: &EnergyEstimate, goal: Goal, weight_kg: f64) -> MacroTargets {
    let (calories, protein_per_kg) = match goal {
        Goal::LoseWeight => (energy.tdee - WEIGHT_LOSS_DEFICIT, PROTEIN_G_PER_KG_ACTIVE_GOAL),
        Goal::BuildMuscle => (energy.tdee + MUSCLE_GAIN_SURPLUS, PROTEIN_G_PER_KG_ACTIVE_GOAL),
        Goal::ImproveFitness | Goal::MaintainWeight => {
            (energy.tdee, PROTEIN_G_PER_KG_MAINTENANCE)
        }
    };

    let protein_g = weight_kg * protein_per_kg;
    let fat_g = calories * FAT_CALORIE_SHARE / 9.0;
    let carbs_g = (calories - protein_g * 4.0 - fat_g * 9.0) / 4.0;

    MacroTargets {
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}
