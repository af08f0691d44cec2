// ABOUTME: Modification descriptor parser for structured change requests
// ABOUTME: Extracts and validates modification JSON from free-text model replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Modification Descriptor Parser
//!
//! The generation service is *asked* to answer modification requests with a
//! JSON object inside a fenced code block, but compliance is probabilistic.
//! This module treats every reply as untrusted input: it attempts to parse
//! the whole body as JSON, then any fenced `json` block inside the text, and
//! classifies everything else as ordinary conversation. Nothing here throws
//! past the validation boundary.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::models::PlanKind;

/// The `action` value that marks a reply as a plan modification
const MODIFY_PLAN_ACTION: &str = "modify_plan";

/// Fenced `json` code block anywhere in the reply.
/// Stored as Option to handle compilation failures gracefully (should never
/// fail for static patterns).
static JSON_BLOCK_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").ok());

/// What part of a plan a modification addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationTarget {
    /// A named weekday
    Day,
    /// A meal slot or food item
    Meal,
    /// A single exercise
    Exercise,
    /// The document as a whole
    General,
}

/// The kind of change the model is describing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Delete the matched location
    Remove,
    /// Add new content
    Add,
    /// Replace the matched location with `details`
    Replace,
    /// Annotate the matched location with a duration change
    AdjustDuration,
    /// Change sets/repetitions
    AdjustSetsReps,
    /// Substitute the matched item with an alternative
    SuggestAlternative,
    /// The model declined; `details` carries the reason
    CannotFulfill,
    /// Free-form schedule adjustment note
    Adjust,
}

/// One requested change to a plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationItem {
    /// What the change addresses
    pub target: ModificationTarget,
    /// Literal text to locate in the plan document
    #[serde(default)]
    pub value: String,
    /// Kind of change
    pub change_type: ChangeType,
    /// Replacement text or explanation
    #[serde(default)]
    pub details: String,
}

/// A validated modification request extracted from a model reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationRequest {
    /// Which plan document the changes apply to
    pub plan_type: PlanKind,
    /// Ordered changes, applied in submission order
    pub modifications: Vec<ModificationItem>,
}

/// Raw wire shape before validation; `action` gates acceptance
#[derive(Debug, Deserialize)]
struct RawModificationRequest {
    #[serde(default)]
    action: String,
    plan_type: PlanKind,
    #[serde(default)]
    modifications: Vec<ModificationItem>,
}

/// Classification of a model reply
#[derive(Debug, Clone)]
pub enum ParsedReply {
    /// The reply carried a valid modification request
    Modification(ModificationRequest),
    /// Ordinary conversational text (including malformed modification
    /// attempts, which degrade gracefully)
    Conversation,
}

/// Parse a model reply into a modification request or conversation.
///
/// Three tiers: the entire reply as JSON, then a json-tagged fenced code
/// block amid surrounding prose, then conversation. A successfully parsed
/// object
/// only counts as a modification when it carries `action = "modify_plan"`,
/// a recognized `plan_type`, and a non-empty modification list.
#[must_use]
pub fn parse_reply(reply: &str) -> ParsedReply {
    if let Some(request) = try_parse_request(reply) {
        debug!(plan_type = %request.plan_type, "reply parsed as direct JSON modification");
        return ParsedReply::Modification(request);
    }

    if let Some(regex) = JSON_BLOCK_PATTERN.as_ref() {
        for capture in regex.captures_iter(reply) {
            if let Some(block) = capture.get(1) {
                if let Some(request) = try_parse_request(block.as_str()) {
                    debug!(plan_type = %request.plan_type, "reply parsed as fenced JSON modification");
                    return ParsedReply::Modification(request);
                }
            }
        }
    }

    ParsedReply::Conversation
}

/// Attempt to parse and validate one JSON candidate
fn try_parse_request(candidate: &str) -> Option<ModificationRequest> {
    let raw: RawModificationRequest = serde_json::from_str(candidate.trim()).ok()?;

    if raw.action != MODIFY_PLAN_ACTION || raw.modifications.is_empty() {
        debug!("JSON parsed but is not a recognized modification action");
        return None;
    }

    Some(ModificationRequest {
        plan_type: raw.plan_type,
        modifications: raw.modifications,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn valid_json() -> &'static str {
        r#"{
            "action": "modify_plan",
            "plan_type": "nutrition",
            "modifications": [
                {
                    "target": "meal",
                    "value": "Oatmeal",
                    "change_type": "suggest_alternative",
                    "details": "Greek yogurt with berries."
                }
            ]
        }"#
    }

    #[test]
    fn test_whole_body_json_parses() {
        let ParsedReply::Modification(request) = parse_reply(valid_json()) else {
            panic!("expected modification");
        };
        assert_eq!(request.plan_type, PlanKind::Nutrition);
        assert_eq!(request.modifications.len(), 1);
        assert_eq!(request.modifications[0].value, "Oatmeal");
        assert_eq!(
            request.modifications[0].change_type,
            ChangeType::SuggestAlternative
        );
    }

    #[test]
    fn test_fenced_json_amid_prose_parses() {
        let reply = format!(
            "Sure, here is the change you asked for:\n```json\n{}\n```\nLet me know!",
            valid_json()
        );
        let ParsedReply::Modification(request) = parse_reply(&reply) else {
            panic!("expected modification");
        };
        assert_eq!(request.plan_type, PlanKind::Nutrition);
    }

    #[test]
    fn test_prose_without_json_is_conversation() {
        let reply = "Your Monday session is a full-body workout with push-ups and squats.";
        assert!(matches!(parse_reply(reply), ParsedReply::Conversation));
    }

    #[test]
    fn test_json_with_wrong_action_is_conversation() {
        let reply = r#"{"action": "greet", "plan_type": "workout", "modifications": [
            {"target": "day", "value": "Monday", "change_type": "remove", "details": ""}
        ]}"#;
        assert!(matches!(parse_reply(reply), ParsedReply::Conversation));
    }

    #[test]
    fn test_json_with_empty_modifications_is_conversation() {
        let reply = r#"{"action": "modify_plan", "plan_type": "workout", "modifications": []}"#;
        assert!(matches!(parse_reply(reply), ParsedReply::Conversation));
    }

    #[test]
    fn test_json_with_unknown_plan_type_is_conversation() {
        let reply = r#"{"action": "modify_plan", "plan_type": "sleep", "modifications": [
            {"target": "general", "value": "", "change_type": "adjust", "details": "x"}
        ]}"#;
        assert!(matches!(parse_reply(reply), ParsedReply::Conversation));
    }

    #[test]
    fn test_malformed_fenced_json_is_conversation() {
        let reply = "```json\n{not json at all\n```";
        assert!(matches!(parse_reply(reply), ParsedReply::Conversation));
    }

    #[test]
    fn test_multiple_fenced_blocks_first_valid_wins() {
        let reply = format!(
            "```json\n{{\"chatter\": true}}\n```\nand then\n```json\n{}\n```",
            valid_json()
        );
        assert!(matches!(
            parse_reply(&reply),
            ParsedReply::Modification(_)
        ));
    }
}
