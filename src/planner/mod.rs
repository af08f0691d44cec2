// ABOUTME: Plan generation facade orchestrating calculator, prompts, and LLM calls
// ABOUTME: Bounded timeout/retry policy around every generation-service call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Plan Generation Facade
//!
//! Turns a validated profile into the three plan documents: the metabolic
//! calculator supplies the energy estimate, the prompt templates carry it
//! into the generation service, and one completion per document comes back.
//! Every external call runs under a bounded per-call deadline and a bounded
//! retry with exponential backoff; failures surface as typed errors, never
//! sentinel strings.

pub mod dispatch;
pub mod modification;
pub mod patcher;

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument, warn};

use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::{estimate, macros, EnergyEstimate, MacroTargets};
use crate::llm::{prompts, ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use crate::models::{PlanSet, Profile};

/// Initial retry backoff in milliseconds
const INITIAL_BACKOFF_MS: u64 = 250;
/// Cap on the retry backoff in milliseconds
const MAX_BACKOFF_MS: u64 = 2_000;

/// Issue one completion under the configured deadline and retry budget.
///
/// Rate-limit errors are not retried; backing off locally would just burn
/// the remaining quota.
///
/// # Errors
///
/// Returns the last call error once the retry budget is exhausted, or a
/// timeout error when the deadline elapses.
pub(crate) async fn complete_bounded(
    provider: &Arc<dyn LlmProvider>,
    llm: &LlmConfig,
    request: &ChatRequest,
) -> AppResult<ChatResponse> {
    let deadline = Duration::from_secs(llm.timeout_secs);
    let mut backoff_ms = INITIAL_BACKOFF_MS;
    let mut attempt = 0;

    loop {
        let result = match timeout(deadline, provider.complete(request)).await {
            Ok(inner) => inner,
            Err(_) => Err(AppError::external_timeout(
                provider.display_name(),
                llm.timeout_secs,
            )),
        };

        match result {
            Ok(response) => return Ok(response),
            Err(error) => {
                attempt += 1;
                if error.code == ErrorCode::ExternalRateLimited || attempt > llm.max_retries {
                    return Err(error);
                }
                debug!(attempt, backoff_ms, error = %error, "generation call failed, retrying");
                sleep(Duration::from_millis(backoff_ms)).await;
                backoff_ms = (backoff_ms * 2).min(MAX_BACKOFF_MS);
            }
        }
    }
}

/// Everything derived for a fresh session in one pass
#[derive(Debug, Clone)]
pub struct GeneratedPlans {
    /// The three generated plan documents
    pub plans: PlanSet,
    /// Energy estimate the prompts were parameterized with
    pub energy: EnergyEstimate,
    /// Macro targets derived from the estimate and goal
    pub targets: MacroTargets,
}

/// Facade over the calculator, prompt templates, and generation service
pub struct PlanGenerator {
    provider: Arc<dyn LlmProvider>,
    llm: LlmConfig,
}

impl PlanGenerator {
    /// Create a facade over a provider with the given call settings
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, llm: LlmConfig) -> Self {
        Self { provider, llm }
    }

    /// Generate the workout and nutrition plans, then the combined weekly
    /// schedule, for a validated profile.
    ///
    /// # Errors
    ///
    /// Returns a typed generation failure (`ExternalServiceError`,
    /// `ExternalServiceUnavailable`, or `ExternalRateLimited`) when any of
    /// the three completions fails after the retry budget.
    #[instrument(skip(self, profile), fields(goal = %profile.goal))]
    pub async fn generate_plans(&self, profile: &Profile) -> AppResult<GeneratedPlans> {
        let energy = estimate(profile);
        let targets = macros(&energy, profile.goal, profile.weight_kg);
        if targets.carbs_g < 0.0 {
            warn!(
                carbs_g = targets.carbs_g,
                "carbohydrate remainder is negative for this profile"
            );
        }

        info!(bmr = energy.bmr, tdee = energy.tdee, "generating plans");

        let workout = self
            .complete_text(prompts::workout_plan(profile, &energy))
            .await?;
        let nutrition = self
            .complete_text(prompts::nutrition_plan(profile, &energy))
            .await?;
        let schedule = self
            .complete_text(prompts::weekly_schedule(&workout, &nutrition))
            .await?;

        Ok(GeneratedPlans {
            plans: PlanSet {
                workout,
                nutrition,
                schedule,
            },
            energy,
            targets,
        })
    }

    /// Produce the assistant reply for one chat turn (see
    /// [`dispatch::respond`]).
    ///
    /// # Errors
    ///
    /// Returns the underlying generation failure.
    pub async fn respond(
        &self,
        user_message: &str,
        history: &[ChatMessage],
        plans: &PlanSet,
        history_window: usize,
    ) -> AppResult<String> {
        dispatch::respond(
            &self.provider,
            &self.llm,
            user_message,
            history,
            plans,
            history_window,
        )
        .await
    }

    /// Check the underlying provider's health
    ///
    /// # Errors
    ///
    /// Returns the provider's failure when the check itself cannot run.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Provider display name for health reporting
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.display_name()
    }

    async fn complete_text(&self, prompt: String) -> AppResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_model(self.llm.model.clone())
            .with_temperature(self.llm.temperature);
        let response = complete_bounded(&self.provider, &self.llm, &request).await?;
        Ok(response.content)
    }
}
