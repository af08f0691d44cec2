// ABOUTME: Health route handler reporting service and provider status
// ABOUTME: Liveness endpoint with generation-service reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Health check route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::resources::ServerResources;

/// Health response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    pub status: String,
    /// Display name of the configured generation provider
    pub provider: String,
    /// Whether the provider answered its health probe
    pub provider_healthy: bool,
    /// Number of live sessions
    pub sessions: usize,
}

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .with_state(resources)
    }

    async fn health(State(resources): State<Arc<ServerResources>>) -> Json<HealthResponse> {
        let provider_healthy = resources.planner.health_check().await.unwrap_or(false);
        let sessions = resources.sessions.len().unwrap_or(0);

        Json(HealthResponse {
            status: "ok".to_owned(),
            provider: resources.planner.provider_name().to_owned(),
            provider_healthy,
            sessions,
        })
    }
}
