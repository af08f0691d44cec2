// ABOUTME: Document export module
// ABOUTME: Renders the three plan documents into a downloadable PDF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! Plan document export.

pub mod pdf;

pub use pdf::render_plan_pdf;
