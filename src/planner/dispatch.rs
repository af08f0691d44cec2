// ABOUTME: Conversational dispatch for chat turns against the generated plans
// ABOUTME: Classifies messages as modification requests or general coaching chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Conversational Dispatch
//!
//! Each chat turn is classified by case-insensitive keyword containment:
//! messages that look like modification requests go to the adjustment
//! template (whose reply the parser then inspects for a change descriptor),
//! everything else becomes a general coaching completion seeded with the
//! current plan documents and the recent turn history.

use std::sync::Arc;
use tracing::debug;

use super::complete_bounded;
use crate::config::LlmConfig;
use crate::errors::AppResult;
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};
use crate::models::PlanSet;

/// Keywords that classify a message as a plan-modification request
const MODIFICATION_KEYWORDS: &[&str] = &[
    "modify",
    "change",
    "adjust",
    "update",
    "suggest alternative for",
    "remove",
    "add",
    "replace",
];

/// Whether a user message reads as a plan-modification request
#[must_use]
pub fn is_modification_request(message: &str) -> bool {
    let lower = message.to_lowercase();
    MODIFICATION_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Keep only the most recent `window` messages of the turn history.
///
/// The history grows without bound over a long session; replaying all of it
/// into every call does not scale, so each turn sees a fixed-size tail.
/// Short sessions are unaffected.
#[must_use]
pub fn windowed<'a>(history: &'a [ChatMessage], window: usize) -> &'a [ChatMessage] {
    let start = history.len().saturating_sub(window);
    &history[start..]
}

/// Produce the assistant reply for one chat turn.
///
/// Modification-flavored messages are answered through the adjustment
/// template with the three current plan documents as context; the reply is
/// returned raw for the modification parser to inspect. Other messages get
/// a coaching completion seeded with the plan-aware system prompt plus the
/// windowed history.
///
/// # Errors
///
/// Returns the underlying generation failure; the caller maps it to a
/// user-visible "generation failed" outcome.
pub async fn respond(
    provider: &Arc<dyn LlmProvider>,
    llm: &LlmConfig,
    user_message: &str,
    history: &[ChatMessage],
    plans: &PlanSet,
    history_window: usize,
) -> AppResult<String> {
    let request = if is_modification_request(user_message) {
        debug!("chat turn classified as modification request");
        ChatRequest::new(vec![ChatMessage::user(prompts::plan_adjustment(
            user_message,
            plans,
        ))])
    } else {
        debug!("chat turn classified as general coaching chat");
        let recent = windowed(history, history_window);
        let mut messages = Vec::with_capacity(recent.len() + 2);
        messages.push(ChatMessage::system(prompts::coach_system(plans)));
        messages.extend_from_slice(recent);
        messages.push(ChatMessage::user(user_message));
        ChatRequest::new(messages)
    };

    let request = request
        .with_model(llm.model.clone())
        .with_temperature(llm.temperature);

    let response = complete_bounded(provider, llm, &request).await?;
    Ok(response.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modification_keywords_case_insensitive() {
        assert!(is_modification_request("Please REMOVE Oatmeal from my plan"));
        assert!(is_modification_request("can you suggest alternative for lunch?"));
        assert!(is_modification_request("Adjust Tuesday's session"));
    }

    #[test]
    fn test_plain_questions_are_not_modifications() {
        assert!(!is_modification_request("what's my Monday workout?"));
        assert!(!is_modification_request("how much protein should I eat"));
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        // Containment is substring-based, so embedded keywords classify too
        assert!(is_modification_request("what additional snacks fit my macros?"));
    }

    #[test]
    fn test_window_keeps_most_recent_tail() {
        let history: Vec<ChatMessage> = (0..30)
            .map(|i| ChatMessage::user(format!("message {i}")))
            .collect();

        let tail = windowed(&history, 20);
        assert_eq!(tail.len(), 20);
        assert_eq!(tail[0].content, "message 10");
        assert_eq!(tail[19].content, "message 29");

        let all = windowed(&history[..5], 20);
        assert_eq!(all.len(), 5);
    }
}
