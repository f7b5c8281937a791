//! Axum route handlers for the recorded-answer API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::media::mjpeg::MjpegFrameSource;
use crate::report::AnalysisReport;
use crate::state::AppState;
use crate::video::analyzer::{VideoReport, DEFAULT_FRAME_BUDGET, DEFAULT_FRAME_RATE};

/// POST /api/v1/analysis/video
///
/// Multipart form: a `video` MJPEG stream plus optional `fps` and
/// `max_frames` text fields. `fps` only affects the reported duration;
/// `max_frames` caps how many frames are sent to the landmark estimator.
pub async fn handle_analyze_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport<VideoReport>>, AppError> {
    let mut video: Option<Bytes> = None;
    let mut frame_rate = DEFAULT_FRAME_RATE;
    let mut max_frames = DEFAULT_FRAME_BUDGET;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("video") => video = Some(field.bytes().await?),
            Some("fps") => {
                let text = field.text().await?;
                frame_rate = text
                    .trim()
                    .parse()
                    .map_err(|_| AppError::Validation(format!("Invalid 'fps' value: {text}")))?;
            }
            Some("max_frames") => {
                let text = field.text().await?;
                max_frames = text.trim().parse().map_err(|_| {
                    AppError::Validation(format!("Invalid 'max_frames' value: {text}"))
                })?;
            }
            _ => {}
        }
    }

    let video =
        video.ok_or_else(|| AppError::Validation("Missing 'video' file field".to_string()))?;
    if video.is_empty() {
        return Err(AppError::Validation(
            "Uploaded video file is empty".to_string(),
        ));
    }
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(AppError::Validation(
            "'fps' must be a positive number".to_string(),
        ));
    }
    if max_frames == 0 {
        return Err(AppError::Validation(
            "'max_frames' must be at least 1".to_string(),
        ));
    }

    let mut source = MjpegFrameSource::new(video);
    Ok(Json(
        state
            .video_analyzer
            .analyze(&mut source, frame_rate, max_frames)
            .await,
    ))
}
