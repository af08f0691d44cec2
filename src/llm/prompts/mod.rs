// ABOUTME: Instruction templates for LLM interactions, loaded at compile time
// ABOUTME: Renders profile fields and plan documents into generation prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Prompt Templates
//!
//! Templates are loaded at compile time from markdown files for easy
//! maintenance and rendered by literal placeholder substitution
//! (`{age}`, `{workout_plan}`, ...). The adjustment template carries the
//! JSON modification contract the parser expects.

use crate::intelligence::EnergyEstimate;
use crate::models::{PlanSet, Profile};

/// Workout plan generation instructions
const WORKOUT_PLAN_TEMPLATE: &str = include_str!("workout_plan.md");
/// Nutrition plan generation instructions
const NUTRITION_PLAN_TEMPLATE: &str = include_str!("nutrition_plan.md");
/// Weekly schedule generation instructions
const WEEKLY_SCHEDULE_TEMPLATE: &str = include_str!("weekly_schedule.md");
/// Plan-adjustment instructions carrying the JSON modification contract
const PLAN_ADJUSTMENT_TEMPLATE: &str = include_str!("plan_adjustment.md");
/// System prompt for general coaching chat
const COACH_SYSTEM_TEMPLATE: &str = include_str!("coach_system.md");

/// Fallback text for a plan document that has not been generated yet
const PLAN_NOT_AVAILABLE: &str = "Not available.";

/// Substitute profile fields and the rounded TDEE into a plan template
fn render_profile_template(template: &str, profile: &Profile, energy: &EnergyEstimate) -> String {
    template
        .replace("{age}", &profile.age.to_string())
        .replace("{gender}", &profile.gender.to_string())
        .replace("{weight}", &profile.weight_kg.to_string())
        .replace("{height}", &profile.height_cm.to_string())
        .replace("{activity_level}", &profile.activity_level.to_string())
        .replace("{goal}", &profile.goal.to_string())
        .replace("{preferences}", &profile.preferences_label())
        .replace("{tdee}", &format!("{}", energy.tdee.round()))
}

/// Render the workout plan generation prompt
#[must_use]
pub fn workout_plan(profile: &Profile, energy: &EnergyEstimate) -> String {
    render_profile_template(WORKOUT_PLAN_TEMPLATE, profile, energy)
}

/// Render the nutrition plan generation prompt
#[must_use]
pub fn nutrition_plan(profile: &Profile, energy: &EnergyEstimate) -> String {
    render_profile_template(NUTRITION_PLAN_TEMPLATE, profile, energy)
}

/// Render the weekly schedule prompt from the two generated plans
#[must_use]
pub fn weekly_schedule(workout_plan: &str, nutrition_plan: &str) -> String {
    WEEKLY_SCHEDULE_TEMPLATE
        .replace("{workout_plan}", workout_plan)
        .replace("{nutrition_plan}", nutrition_plan)
}

/// Render the plan-adjustment prompt for a modification request
#[must_use]
pub fn plan_adjustment(user_request: &str, plans: &PlanSet) -> String {
    PLAN_ADJUSTMENT_TEMPLATE
        .replace("{workout_plan}", or_unavailable(&plans.workout))
        .replace("{nutrition_plan}", or_unavailable(&plans.nutrition))
        .replace("{weekly_schedule}", or_unavailable(&plans.schedule))
        .replace("{user_request}", user_request)
}

/// Render the coach system prompt embedding the three current plans
#[must_use]
pub fn coach_system(plans: &PlanSet) -> String {
    COACH_SYSTEM_TEMPLATE
        .replace("{workout_plan}", or_unavailable(&plans.workout))
        .replace("{nutrition_plan}", or_unavailable(&plans.nutrition))
        .replace("{weekly_schedule}", or_unavailable(&plans.schedule))
}

fn or_unavailable(text: &str) -> &str {
    if text.is_empty() {
        PLAN_NOT_AVAILABLE
    } else {
        text
    }
}
