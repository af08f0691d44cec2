// ABOUTME: Export route handler streaming the plan PDF
// ABOUTME: Renders the session's current plan documents on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! PDF export route.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::render_plan_pdf;
use crate::resources::ServerResources;

/// Suggested download filename
const EXPORT_FILENAME: &str = "FitMate_Personalized_Plan.pdf";

/// Export routes handler
pub struct ExportRoutes;

impl ExportRoutes {
    /// Create the export router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/sessions/:session_id/export/pdf",
                get(Self::export_pdf),
            )
            .with_state(resources)
    }

    async fn export_pdf(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<impl IntoResponse, AppError> {
        let plans = resources.sessions.plans(session_id)?;
        let bytes = render_plan_pdf(&plans)?;

        Ok((
            [
                (header::CONTENT_TYPE, "application/pdf".to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILENAME}\""),
                ),
            ],
            bytes,
        ))
    }
}
