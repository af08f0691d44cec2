// ABOUTME: PDF rendering of the generated fitness plans via printpdf
// ABOUTME: Paginated A4 layout with one titled section per plan document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # PDF Export
//!
//! Renders the three plan documents into a paginated A4 PDF with built-in
//! Helvetica fonts. Bold markers (`**...**`) emitted by the generation
//! service are stripped rather than styled; plan text is otherwise rendered
//! line by line with word wrapping and page breaks.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::io::BufWriter;

use crate::errors::{AppError, AppResult};
use crate::models::PlanSet;

/// A4 page width in millimeters
const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 page height in millimeters
const PAGE_HEIGHT_MM: f32 = 297.0;
/// Left margin in millimeters
const MARGIN_LEFT_MM: f32 = 20.0;
/// Vertical position of the first line on a page
const TOP_MM: f32 = 280.0;
/// Lowest vertical position before a page break
const BOTTOM_MM: f32 = 18.0;
/// Body line advance in millimeters
const LINE_STEP_MM: f32 = 5.0;
/// Maximum characters per wrapped body line
const WRAP_COLUMNS: usize = 95;

/// Cursor state while laying out pages
struct PdfCursor {
    doc: printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl PdfCursor {
    /// Advance downward, breaking to a new page when the bottom is reached
    fn advance(&mut self, step: f32) {
        self.y = Mm(self.y.0 - step);
        if self.y.0 < BOTTOM_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(TOP_MM);
        }
    }

    fn text(&mut self, text: &str, size: f32, font: &IndirectFontRef, step: f32) {
        self.layer
            .use_text(text, size, Mm(MARGIN_LEFT_MM), self.y, font);
        self.advance(step);
    }
}

/// Render the three plan documents into PDF bytes.
///
/// # Errors
///
/// Returns an internal error if font loading or document serialization
/// fails (neither is expected for built-in fonts and an in-memory buffer).
pub fn render_plan_pdf(plans: &PlanSet) -> AppResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "FitMate AI Fitness Plan",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::internal(format!("PDF font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::internal(format!("PDF font error: {e}")))?;

    let layer = doc.get_page(page).get_layer(layer);
    let mut cursor = PdfCursor {
        doc,
        layer,
        y: Mm(TOP_MM),
    };

    cursor.text("FitMate AI Fitness Plan", 16.0, &bold, 12.0);

    let sections = [
        ("Workout Plan", plans.workout.as_str()),
        ("Nutrition Plan", plans.nutrition.as_str()),
        ("Weekly Schedule", plans.schedule.as_str()),
    ];

    for (title, body) in sections {
        cursor.text(title, 12.0, &bold, 7.0);
        for line in body.lines() {
            let cleaned = strip_bold_markers(line);
            if cleaned.trim().is_empty() {
                cursor.advance(LINE_STEP_MM / 2.0);
                continue;
            }
            for wrapped in wrap_text(&cleaned, WRAP_COLUMNS) {
                cursor.text(&wrapped, 9.0, &font, LINE_STEP_MM);
            }
        }
        cursor.advance(LINE_STEP_MM);
    }

    let mut buffer = BufWriter::new(Vec::new());
    cursor
        .doc
        .save(&mut buffer)
        .map_err(|e| AppError::internal(format!("PDF save error: {e}")))?;
    buffer
        .into_inner()
        .map_err(|e| AppError::internal(format!("PDF buffer error: {e}")))
}

/// Drop `**bold**` markers, keeping their content
fn strip_bold_markers(line: &str) -> String {
    line.replace("**", "")
}

/// Simple word-wrap helper for PDF text rendering
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
