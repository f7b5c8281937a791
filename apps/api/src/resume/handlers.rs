//! Axum route handlers for the resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;
use crate::report::AnalysisReport;
use crate::resume::analyzer::ResumeReport;
use crate::resume::extract;
use crate::state::AppState;

/// POST /api/v1/analysis/resume
///
/// Multipart form with a single `resume` file (PDF or plain text). Document
/// extraction failures are analysis outcomes, reported inside the envelope
/// rather than as HTTP errors.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport<ResumeReport>>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or("").to_string();
            upload = Some((filename, field.bytes().await?));
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation(
            "Uploaded resume file is empty".to_string(),
        ));
    }

    let report = match extract::document_text(&filename, data).await {
        Ok(text) => state.resume_analyzer.analyze(&text).await,
        Err(e) => {
            warn!(error = %e, "document text extraction failed");
            AnalysisReport::failure(e.to_string())
        }
    };

    Ok(Json(report))
}
