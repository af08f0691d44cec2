// ABOUTME: HTTP route assembly for the FitMate service
// ABOUTME: Merges the health, session, chat, and export routers with middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! HTTP surface of the service.
//!
//! Each concern registers its own router against the shared
//! [`ServerResources`](crate::resources::ServerResources) state; this module
//! merges them and applies the tracing, CORS, timeout, and body-limit
//! middleware.

pub mod chat;
pub mod export;
pub mod health;
pub mod sessions;

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Overall request deadline; generation calls dominate, so this sits above
/// the per-call LLM timeout times the three plan completions.
const REQUEST_TIMEOUT_SECS: u64 = 120;
/// Request body cap in bytes
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes(resources.clone()))
        .merge(sessions::SessionRoutes::routes(resources.clone()))
        .merge(chat::ChatRoutes::routes(resources.clone()))
        .merge(export::ExportRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}
