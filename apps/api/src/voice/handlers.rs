//! Axum route handlers for the spoken-answer API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::media::wav;
use crate::report::AnalysisReport;
use crate::state::AppState;
use crate::voice::analyzer::VoiceReport;

/// POST /api/v1/analysis/voice
///
/// Multipart form: an `audio` WAV file plus an optional `question` text
/// field. The payload must decode as WAV before analysis starts; anything
/// after that point is reported inside the envelope.
pub async fn handle_analyze_voice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport<VoiceReport>>, AppError> {
    let mut audio: Option<Bytes> = None;
    let mut question = String::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("audio") => audio = Some(field.bytes().await?),
            Some("question") => question = field.text().await?,
            _ => {}
        }
    }

    let audio =
        audio.ok_or_else(|| AppError::Validation("Missing 'audio' file field".to_string()))?;
    if audio.is_empty() {
        return Err(AppError::Validation(
            "Uploaded audio file is empty".to_string(),
        ));
    }

    let clip = wav::decode(&audio)
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid WAV payload: {e}")))?;

    Ok(Json(state.voice_analyzer.analyze(&question, &clip).await))
}
