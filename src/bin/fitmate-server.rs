// ABOUTME: FitMate HTTP server binary
// ABOUTME: Loads configuration, wires the Gemini provider, and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # FitMate Server Binary
//!
//! Starts the FitMate HTTP API: profile submission, plan generation, chat,
//! and PDF export. Requires `GEMINI_API_KEY` in the environment.

use anyhow::Result;
use clap::Parser;
use fitmate::config::ServerConfig;
use fitmate::llm::{GeminiProvider, LlmProvider};
use fitmate::resources::ServerResources;
use fitmate::{logging, routes};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "fitmate-server")]
#[command(about = "FitMate - AI fitness coach API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting FitMate server");
    info!("{}", config.summary());

    let provider: Arc<dyn LlmProvider> =
        Arc::new(GeminiProvider::from_env()?.with_default_model(config.llm.model.clone()));
    let resources = Arc::new(ServerResources::new(config.clone(), provider));

    let app = routes::router(resources);

    let listener = TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("FitMate API listening on http://0.0.0.0:{}", config.http_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("FitMate server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
    }
}
