// ABOUTME: Environment-based server configuration with typed accessors
// ABOUTME: Loads HTTP, LLM, and session settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Server configuration loaded from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `FITMATE_HTTP_PORT` | `8081` | HTTP listen port |
//! | `GEMINI_API_KEY` | (none) | Gemini API key (required to serve) |
//! | `FITMATE_LLM_MODEL` | `gemini-2.0-flash` | model identifier |
//! | `FITMATE_LLM_TEMPERATURE` | `0.7` | sampling temperature |
//! | `FITMATE_LLM_TIMEOUT_SECS` | `30` | per-call deadline |
//! | `FITMATE_LLM_MAX_RETRIES` | `2` | bounded retry attempts |
//! | `FITMATE_SESSION_CAPACITY` | `256` | max concurrent sessions |
//! | `FITMATE_HISTORY_WINDOW` | `20` | chat messages replayed per turn |

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// LLM call configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier passed to the generation service
    pub model: String,
    /// Sampling temperature for generation requests
    pub temperature: f32,
    /// Per-call deadline in seconds
    pub timeout_secs: u64,
    /// Maximum retry attempts for a failed call
    pub max_retries: u32,
}

/// Session store configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of live sessions kept in memory
    pub capacity: usize,
    /// Number of most recent chat messages replayed into each turn
    pub history_window: usize,
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// LLM call settings
    pub llm: LlmConfig,
    /// Session store settings
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse as its expected
    /// type. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_port: env_parse("FITMATE_HTTP_PORT", 8081)?,
            llm: LlmConfig {
                model: env::var("FITMATE_LLM_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash".to_owned()),
                temperature: env_parse("FITMATE_LLM_TEMPERATURE", 0.7)?,
                timeout_secs: env_parse("FITMATE_LLM_TIMEOUT_SECS", 30)?,
                max_retries: env_parse("FITMATE_LLM_MAX_RETRIES", 2)?,
            },
            session: SessionConfig {
                capacity: env_parse("FITMATE_SESSION_CAPACITY", 256)?,
                history_window: env_parse("FITMATE_HISTORY_WINDOW", 20)?,
            },
        })
    }

    /// One-line configuration summary, logged at startup
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} model={} temperature={} timeout={}s retries={} sessions={} history_window={}",
            self.http_port,
            self.llm.model,
            self.llm.temperature,
            self.llm.timeout_secs,
            self.llm.max_retries,
            self.session.capacity,
            self.session.history_window,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8081,
            llm: LlmConfig {
                model: "gemini-2.0-flash".to_owned(),
                temperature: 0.7,
                timeout_secs: 30,
                max_retries: 2,
            },
            session: SessionConfig {
                capacity: 256,
                history_window: 20,
            },
        }
    }
}

/// Parse an environment variable, falling back to a default when unset
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 8081);
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.session.history_window, 20);
    }

    #[test]
    fn test_summary_mentions_model() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("gemini-2.0-flash"));
    }
}
