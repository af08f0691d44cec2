// ABOUTME: Deterministic calculation engine feeding plan generation
// ABOUTME: Currently hosts the metabolic (BMR/TDEE/macro) calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Deterministic intelligence layer.
//!
//! Everything here is pure computation over the validated profile; the
//! generation facade feeds the results into its prompt templates.

pub mod metabolics;

pub use metabolics::{estimate, macros, EnergyEstimate, MacroTargets};
