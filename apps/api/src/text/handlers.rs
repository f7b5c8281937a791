//! Axum route handlers for the written-answer API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::report::AnalysisReport;
use crate::state::AppState;
use crate::text::analyzer::TextReport;

#[derive(Debug, Deserialize)]
pub struct TextAnalysisRequest {
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/analysis/text
///
/// Scores a written answer against the question it addresses. Analysis
/// failures are reported inside the envelope, not as HTTP errors.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<TextAnalysisRequest>,
) -> Json<AnalysisReport<TextReport>> {
    Json(
        state
            .text_analyzer
            .analyze(&request.question, &request.answer)
            .await,
    )
}
