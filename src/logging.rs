// ABOUTME: Logging configuration and structured logging setup for the service
// ABOUTME: Configures log levels and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Production-ready logging configuration with structured output

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Machine-readable JSON lines
    Json,
    /// Human-readable multi-line output
    Pretty,
    /// Single-line output for terminals
    Compact,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("FITMATE_LOG_FORMAT").as_deref() {
            Ok("json") => Self::Json,
            Ok("pretty") => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

/// Initialize the global tracing subscriber from environment variables.
///
/// `RUST_LOG` controls the filter (defaults to `info` plus quieter hyper
/// internals); `FITMATE_LOG_FORMAT` selects `json`, `pretty`, or `compact`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
    }

    Ok(())
}
