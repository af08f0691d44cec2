// ABOUTME: Session route handlers for profile submission and plan retrieval
// ABOUTME: Creating a session runs the full plan-generation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Session routes.
//!
//! `POST /api/sessions` accepts a profile, generates the three plan
//! documents, and returns the new session with its energy estimate and
//! macro targets. Categorical fields arrive as user-facing labels and are
//! parsed leniently (unknown activity levels fall back to sedentary,
//! unknown goals to maintenance); numeric fields are validated against the
//! documented input contract.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intelligence::{EnergyEstimate, MacroTargets};
use crate::models::{ActivityLevel, Gender, Goal, PlanSet, Profile};
use crate::resources::ServerResources;

/// Request to create a session from a profile
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Age in years (16-100)
    pub age: u32,
    /// Gender label ("Male", "Female", anything else is Other)
    pub gender: String,
    /// Body weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Activity level label; unknown labels default to sedentary
    pub activity_level: String,
    /// Fitness goal label; unknown labels default to maintenance
    pub goal: String,
    /// Preference tags, e.g. "Vegetarian", "No Gym Access"
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Response for a freshly created session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session identifier for subsequent chat and export calls
    pub id: Uuid,
    /// Energy estimate the plans were parameterized with
    pub energy: EnergyEstimate,
    /// Macro targets derived from the estimate and goal
    pub targets: MacroTargets,
    /// The three generated plan documents
    pub plans: PlanSet,
}

/// Session routes handler
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create the session router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions", post(Self::create_session))
            .route("/api/sessions/:session_id/plans", get(Self::get_plans))
            .with_state(resources)
    }

    /// Validate the profile, generate all three plans, and open a session.
    ///
    /// Generation failure surfaces as a typed 502/503 error body and no
    /// session is retained.
    async fn create_session(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateSessionRequest>,
    ) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
        let profile = Profile::new(
            request.age,
            Gender::from_label(&request.gender),
            request.weight_kg,
            request.height_cm,
            ActivityLevel::from_label(&request.activity_level),
            Goal::from_label(&request.goal),
            request.preferences,
        )?;

        let generated = resources.planner.generate_plans(&profile).await?;
        let id = resources
            .sessions
            .create(profile, generated.plans.clone())?;

        info!(session_id = %id, "session created");

        Ok((
            StatusCode::CREATED,
            Json(SessionResponse {
                id,
                energy: generated.energy,
                targets: generated.targets,
                plans: generated.plans,
            }),
        ))
    }

    /// Current plan documents for a session
    async fn get_plans(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Json<PlanSet>, AppError> {
        Ok(Json(resources.sessions.plans(session_id)?))
    }
}
