//! Axum route handlers for the session readiness API.

use axum::Json;

use crate::errors::AppError;
use crate::session::readiness::{self, ReadinessReport, SessionScores};

/// POST /api/v1/analysis/session
///
/// Takes the four per-test scores and returns the combined readiness
/// verdict. Scores outside 0..=100 (or non-numeric) are rejected.
pub async fn handle_assess_session(
    Json(scores): Json<SessionScores>,
) -> Result<Json<ReadinessReport>, AppError> {
    for (label, value) in [
        ("resume_score", scores.resume_score),
        ("text_score", scores.text_score),
        ("voice_score", scores.voice_score),
        ("video_score", scores.video_score),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(AppError::Validation(format!(
                "'{label}' must be between 0 and 100"
            )));
        }
    }

    Ok(Json(readiness::assess(&scores)))
}
