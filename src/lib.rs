// ABOUTME: Main library entry point for the FitMate fitness assistant
// ABOUTME: Profile intake, energy estimation, LLM plan generation, and plan patching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

#![deny(unsafe_code)]

//! # FitMate
//!
//! A personal-fitness assistant service: it collects a user profile,
//! derives an energy-expenditure estimate, and uses a hosted generative
//! model to produce a workout plan, a nutrition plan, and a combined weekly
//! schedule. A conversational follow-up mode lets the user ask questions
//! about the generated plans or request modifications, which the model is
//! prompted to express as a structured change descriptor that the plan
//! patcher applies to the in-memory plan text.
//!
//! ## Architecture
//!
//! - **`intelligence`**: deterministic metabolic calculator (BMR, TDEE,
//!   macro targets)
//! - **`llm`**: generation-service boundary (provider trait, Gemini client,
//!   prompt templates)
//! - **`planner`**: generation facade, modification parser, plan patcher,
//!   and conversational dispatch
//! - **`session`**: bounded in-memory session store
//! - **`export`**: PDF rendering of the plan documents
//! - **`routes`**: Axum HTTP surface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fitmate::config::ServerConfig;
//! use fitmate::llm::GeminiProvider;
//! use fitmate::resources::ServerResources;
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let provider = Arc::new(GeminiProvider::from_env()?);
//! let resources = Arc::new(ServerResources::new(config, provider));
//! let app = fitmate::routes::router(resources);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod export;
pub mod intelligence;
pub mod llm;
pub mod logging;
pub mod models;
pub mod planner;
pub mod resources;
pub mod routes;
pub mod session;
