// ABOUTME: Deterministic scripted LLM provider for integration tests
// ABOUTME: Pops queued replies and records every request for assertions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use fitmate::errors::{AppError, ErrorCode};
use fitmate::llm::{ChatRequest, ChatResponse, LlmProvider};

/// One scripted provider outcome
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Successful completion with this text
    Text(String),
    /// Failed completion with this message
    Failure(String),
}

impl ScriptedReply {
    /// Successful completion
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Failed completion
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

/// LLM provider that plays back a fixed script
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Create a provider that answers with `replies` in order
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue additional replies after construction
    pub fn push_reply(&self, reply: ScriptedReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Every request the provider has received, in order
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .ok_or_else(|| AppError::internal("scripted provider ran out of replies"))?;

        match reply {
            ScriptedReply::Text(content) => Ok(ChatResponse {
                content,
                model: "scripted-1".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            ScriptedReply::Failure(message) => Err(AppError::new(
                ErrorCode::ExternalServiceError,
                message,
            )),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
