// ABOUTME: Chat route handler for conversational follow-up on generated plans
// ABOUTME: One turn per request; modification replies patch the stored plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Chat route.
//!
//! Each `POST` is one chat turn: the message is dispatched to the
//! generation service, the reply is inspected for a modification
//! descriptor, and when one is present the patcher updates the stored plan
//! documents and the joined feedback becomes the assistant reply. Malformed
//! modification payloads degrade to ordinary conversation; a turn never
//! crashes the session.

use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::PlanSet;
use crate::planner::modification::{parse_reply, ParsedReply};
use crate::planner::patcher;
use crate::resources::ServerResources;

/// Request carrying one user chat message
#[derive(Debug, Deserialize)]
pub struct ChatTurnRequest {
    /// The user's message
    pub message: String,
}

/// Response for one completed chat turn
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatTurnResponse {
    /// Assistant reply shown to the user
    pub reply: String,
    /// Whether this turn modified the plan documents
    pub plans_updated: bool,
    /// The updated plan documents when `plans_updated` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<PlanSet>,
}

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create the chat router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions/:session_id/chat", post(Self::send_message))
            .with_state(resources)
    }

    async fn send_message(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<ChatTurnRequest>,
    ) -> Result<Json<ChatTurnResponse>, AppError> {
        if request.message.trim().is_empty() {
            return Err(AppError::invalid_input("message must not be empty"));
        }

        // Snapshot outside the lock; the external call must not block the store
        let context = resources.sessions.turn_context(session_id)?;

        let reply = resources
            .planner
            .respond(
                &request.message,
                &context.history,
                &context.plans,
                resources.config.session.history_window,
            )
            .await?;

        let response = match parse_reply(&reply) {
            ParsedReply::Modification(modification) => {
                let mut plans = context.plans;
                let feedback = patcher::apply(
                    modification.plan_type,
                    &modification.modifications,
                    &mut plans,
                );
                let reply = format!("Plan Updated! {}", feedback.join("; "));

                info!(
                    session_id = %session_id,
                    plan = %modification.plan_type,
                    items = modification.modifications.len(),
                    "applied plan modifications"
                );

                resources.sessions.record_turn(
                    session_id,
                    &request.message,
                    &reply,
                    Some(plans.clone()),
                )?;

                ChatTurnResponse {
                    reply,
                    plans_updated: true,
                    plans: Some(plans),
                }
            }
            ParsedReply::Conversation => {
                resources
                    .sessions
                    .record_turn(session_id, &request.message, &reply, None)?;

                ChatTurnResponse {
                    reply,
                    plans_updated: false,
                    plans: None,
                }
            }
        };

        Ok(Json(response))
    }
}
