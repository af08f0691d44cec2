// ABOUTME: Shared server resources bundled for handler state
// ABOUTME: Configuration, plan generation facade, and the session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Shared server resources.
//!
//! One `Arc<ServerResources>` is built at startup and cloned into every
//! route handler as Axum state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::LlmProvider;
use crate::planner::PlanGenerator;
use crate::session::SessionStore;

/// Resource bundle shared across all route handlers
pub struct ServerResources {
    /// Server configuration loaded at startup
    pub config: ServerConfig,
    /// Plan generation facade over the LLM provider
    pub planner: PlanGenerator,
    /// Bounded in-memory session store
    pub sessions: SessionStore,
}

impl ServerResources {
    /// Assemble resources from configuration and a generation provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let planner = PlanGenerator::new(provider, config.llm.clone());
        let sessions = SessionStore::new(config.session.capacity);
        Self {
            config,
            planner,
            sessions,
        }
    }
}
