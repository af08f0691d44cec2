// ABOUTME: Configuration module for the FitMate service
// ABOUTME: Environment-only configuration, loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Configuration management
//!
//! All configuration comes from environment variables; there is no
//! configuration file. See [`environment::ServerConfig::from_env`].

pub mod environment;

pub use environment::{LlmConfig, ServerConfig, SessionConfig};
