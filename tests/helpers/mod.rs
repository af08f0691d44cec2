// ABOUTME: Shared helpers for integration tests
// ABOUTME: Router construction with a scripted LLM provider and HTTP test utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

#![allow(dead_code)]

pub mod axum_test;
pub mod scripted_llm;

use axum::Router;
use fitmate::config::ServerConfig;
use fitmate::resources::ServerResources;
use fitmate::routes;
use std::sync::Arc;

use scripted_llm::ScriptedProvider;

/// Test configuration: no retries, tight timeout, small store
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.llm.max_retries = 0;
    config.llm.timeout_secs = 5;
    config.session.capacity = 8;
    config
}

/// Build the full application router around a scripted provider
pub fn test_router(provider: Arc<ScriptedProvider>) -> Router {
    let resources = Arc::new(ServerResources::new(test_config(), provider));
    routes::router(resources)
}

/// JSON body for a standard valid profile
pub fn standard_profile() -> serde_json::Value {
    serde_json::json!({
        "age": 30,
        "gender": "Male",
        "weight_kg": 70.0,
        "height_cm": 175.0,
        "activity_level": "Sedentary",
        "goal": "Maintain Weight",
        "preferences": ["Vegetarian"]
    })
}

/// Scripted replies that satisfy one full plan generation
pub fn generation_replies() -> Vec<scripted_llm::ScriptedReply> {
    vec![
        scripted_llm::ScriptedReply::text("Monday: Push-ups 3x10\nWednesday: Squats 3x12"),
        scripted_llm::ScriptedReply::text("Breakfast: Oatmeal\nLunch: Salad\nDinner: Tofu stir-fry"),
        scripted_llm::ScriptedReply::text("Monday: Full body workout\nTuesday: Rest"),
    ]
}
