// ABOUTME: Plan patcher applying modification descriptors to plan text
// ABOUTME: Literal first-occurrence search-and-replace with per-item feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Plan Patcher
//!
//! Applies a list of modification items to the in-memory plan documents.
//! Plan text is opaque line-oriented prose, so every policy here is literal,
//! case-sensitive substring matching with first-occurrence-wins semantics,
//! a deliberate predictability-over-recall trade-off. Each item produces one
//! human-readable feedback sentence; a target that cannot be located leaves
//! the document unchanged and reports that instead of failing the turn.

use tracing::debug;

use super::modification::{ChangeType, ModificationItem};
use crate::models::{PlanKind, PlanSet};

/// Apply modifications to the targeted plan document, in submission order.
///
/// Returns the ordered feedback lines; the caller joins them for display.
/// Unmatched (plan, change type) combinations report "unsupported" feedback
/// rather than silently doing nothing, so a no-op is always distinguishable
/// from success.
pub fn apply(plan_kind: PlanKind, modifications: &[ModificationItem], plans: &mut PlanSet) -> Vec<String> {
    let mut feedback = Vec::with_capacity(modifications.len());

    for item in modifications {
        debug!(plan = %plan_kind, change_type = ?item.change_type, value = %item.value, "applying modification");
        let line = match (plan_kind, item.change_type) {
            (PlanKind::Workout, ChangeType::AdjustDuration) => {
                adjust_workout_duration(&mut plans.workout, item)
            }
            (PlanKind::Workout, ChangeType::SuggestAlternative) => {
                replace_workout_item(&mut plans.workout, item)
            }
            (
                PlanKind::Nutrition,
                ChangeType::SuggestAlternative | ChangeType::Remove | ChangeType::Replace,
            ) => patch_nutrition_line(&mut plans.nutrition, item),
            (PlanKind::Schedule, ChangeType::Adjust) => {
                append_schedule_note(&mut plans.schedule, item)
            }
            (_, ChangeType::CannotFulfill) => cannot_fulfill_feedback(item),
            _ => unsupported_feedback(plan_kind, item),
        };
        feedback.push(line);
    }

    feedback
}

/// workout + adjust_duration: annotate the first occurrence of `value`
/// with " (details)".
fn adjust_workout_duration(workout: &mut String, item: &ModificationItem) -> String {
    match workout.find(&item.value) {
        Some(position) => {
            let insert_at = position + item.value.len();
            workout.insert_str(insert_at, &format!(" ({})", item.details));
            format!("Workout plan for {} adjusted: {}.", item.value, item.details)
        }
        None => format!("Could not find '{}' in workout plan to adjust.", item.value),
    }
}

/// workout + suggest_alternative: replace the first (and only the first)
/// occurrence of `value` with `details`.
fn replace_workout_item(workout: &mut String, item: &ModificationItem) -> String {
    match workout.find(&item.value) {
        Some(position) => {
            workout.replace_range(position..position + item.value.len(), &item.details);
            format!(
                "Workout plan alternative for {} suggested: {}.",
                item.value, item.details
            )
        }
        None => format!(
            "Could not find '{}' in workout plan to suggest alternative.",
            item.value
        ),
    }
}

/// nutrition + remove/replace/suggest_alternative: line-oriented patching.
///
/// The first line containing `value` is blanked (remove) or overwritten
/// entirely with `details` (replace/suggest_alternative); removal then drops
/// every blank line from the document so no gap is left behind.
fn patch_nutrition_line(nutrition: &mut String, item: &ModificationItem) -> String {
    let mut lines: Vec<String> = nutrition.split('\n').map(str::to_owned).collect();
    let Some(index) = lines.iter().position(|line| line.contains(&item.value)) else {
        return format!(
            "Could not find '{}' in nutrition plan to suggest alternative/remove.",
            item.value
        );
    };

    let feedback = if item.change_type == ChangeType::Remove {
        lines[index].clear();
        format!("Nutrition meal '{}' removed.", item.value)
    } else {
        lines[index] = item.details.clone();
        format!(
            "Nutrition meal '{}' replaced with '{}'.",
            item.value, item.details
        )
    };

    *nutrition = lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    feedback
}

/// schedule + adjust: unconditionally append a note paragraph.
fn append_schedule_note(schedule: &mut String, item: &ModificationItem) -> String {
    schedule.push_str(&format!("\n\nNote: {}", item.details));
    format!("Weekly schedule adjusted: {}.", item.details)
}

/// The model declined the request; relay its reason.
fn cannot_fulfill_feedback(item: &ModificationItem) -> String {
    format!("Could not fulfill this request: {}", item.details)
}

/// A syntactically valid combination with no defined patching policy.
fn unsupported_feedback(plan_kind: PlanKind, item: &ModificationItem) -> String {
    format!(
        "Unsupported modification: {:?} is not applicable to the {} plan.",
        item.change_type, plan_kind
    )
}
