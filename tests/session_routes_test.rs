// ABOUTME: Integration tests for session creation and plan retrieval routes
// ABOUTME: Drives the full router with a scripted generation provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use std::sync::Arc;

use fitmate::errors::ErrorResponse;
use fitmate::models::PlanSet;
use fitmate::routes::sessions::SessionResponse;
use helpers::axum_test::AxumTestRequest;
use helpers::scripted_llm::{ScriptedProvider, ScriptedReply};
use helpers::{generation_replies, standard_profile, test_router};

// ============================================================================
// Session Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_session_generates_three_plans() {
    let provider = Arc::new(ScriptedProvider::new(generation_replies()));
    let router = test_router(provider.clone());

    let response = AxumTestRequest::post("/api/sessions")
        .json(&standard_profile())
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let session: SessionResponse = response.json();
    assert!(session.plans.workout.contains("Push-ups"));
    assert!(session.plans.nutrition.contains("Oatmeal"));
    assert!(session.plans.schedule.contains("Rest"));

    // Reference values for age=30, male, 70 kg, 175 cm, sedentary
    assert!((session.energy.bmr - 1773.75).abs() < 1e-6);
    assert!((session.energy.tdee - 2128.5).abs() < 1e-6);

    // Energy identity holds on the returned targets
    let recomposed = session.targets.protein_g * 4.0
        + session.targets.fat_g * 9.0
        + session.targets.carbs_g * 4.0;
    assert!((recomposed - session.targets.calories).abs() <= 1.0);

    // One completion per plan document
    assert_eq!(provider.requests().len(), 3);
}

#[tokio::test]
async fn test_create_session_prompts_carry_profile_and_tdee() {
    let provider = Arc::new(ScriptedProvider::new(generation_replies()));
    let router = test_router(provider.clone());

    AxumTestRequest::post("/api/sessions")
        .json(&standard_profile())
        .send(router)
        .await;

    let requests = provider.requests();
    let workout_prompt = &requests[0].messages[0].content;
    assert!(workout_prompt.contains("Age: 30"));
    assert!(workout_prompt.contains("(TDEE): 2129 calories"));
    assert!(workout_prompt.contains("Preferences: Vegetarian"));

    // The schedule prompt is built from the two generated documents
    let schedule_prompt = &requests[2].messages[0].content;
    assert!(schedule_prompt.contains("Push-ups"));
    assert!(schedule_prompt.contains("Oatmeal"));
}

#[tokio::test]
async fn test_create_session_out_of_range_age_rejected() {
    let provider = Arc::new(ScriptedProvider::new(vec![]));
    let router = test_router(provider.clone());

    let mut profile = standard_profile();
    profile["age"] = serde_json::json!(101);

    let response = AxumTestRequest::post("/api/sessions")
        .json(&profile)
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = response.json();
    assert!(error.error.message.contains("age"));

    // Validation failed before any generation call
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_create_session_generation_failure_returns_bad_gateway() {
    let provider = Arc::new(ScriptedProvider::new(vec![ScriptedReply::failure(
        "model unavailable",
    )]));
    let router = test_router(provider);

    let response = AxumTestRequest::post("/api/sessions")
        .json(&standard_profile())
        .send(router.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);

    let error: ErrorResponse = response.json();
    let body = serde_json::to_string(&error).unwrap();
    assert!(body.contains("EXTERNAL_SERVICE_ERROR"));
}

#[tokio::test]
async fn test_unknown_activity_level_defaults_to_sedentary() {
    let provider = Arc::new(ScriptedProvider::new(generation_replies()));
    let router = test_router(provider);

    let mut profile = standard_profile();
    profile["activity_level"] = serde_json::json!("couch potato");

    let response = AxumTestRequest::post("/api/sessions")
        .json(&profile)
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let session: SessionResponse = response.json();
    // Sedentary multiplier applied
    assert!((session.energy.tdee - session.energy.bmr * 1.2).abs() < 1e-6);
}

// ============================================================================
// Plan Retrieval Tests
// ============================================================================

#[tokio::test]
async fn test_get_plans_roundtrip() {
    let provider = Arc::new(ScriptedProvider::new(generation_replies()));
    let router = test_router(provider);

    let created = AxumTestRequest::post("/api/sessions")
        .json(&standard_profile())
        .send(router.clone())
        .await;
    let session: SessionResponse = created.json();

    let response = AxumTestRequest::get(&format!("/api/sessions/{}/plans", session.id))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let plans: PlanSet = response.json();
    assert_eq!(plans, session.plans);
}

#[tokio::test]
async fn test_get_plans_unknown_session_not_found() {
    let provider = Arc::new(ScriptedProvider::new(vec![]));
    let router = test_router(provider);

    let response = AxumTestRequest::get(&format!(
        "/api/sessions/{}/plans",
        uuid::Uuid::new_v4()
    ))
    .send(router)
    .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
