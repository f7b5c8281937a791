//! Capability traits for the external recognition services the analyzers
//! consume: grammar checking, speech-to-text, face/pose landmarks, and
//! sentiment polarity. Each is carried in `AppState` behind an `Arc<dyn …>`
//! so tests can substitute local mocks for the HTTP clients.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::media::{AudioClip, VideoFrame};

pub mod landmarks;
pub mod languagetool;
pub mod sentiment;
pub mod speech;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Grammar checking
// ────────────────────────────────────────────────────────────────────────────

/// A single issue raised by the grammar checker.
#[derive(Debug, Clone)]
pub struct GrammarIssue {
    pub rule_id: String,
    pub issue_type: String,
    pub message: String,
}

impl GrammarIssue {
    pub fn is_misspelling(&self) -> bool {
        self.issue_type.eq_ignore_ascii_case("misspelling")
    }
}

#[async_trait]
pub trait TextChecker: Send + Sync {
    /// Returns the issues found in `text`, in document order.
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Speech-to-text
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribes a mono clip. `Ok(None)` is the "not understood" signal,
    /// distinct from a service failure.
    async fn transcribe(&self, clip: &AudioClip) -> Result<Option<String>, CollaboratorError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Face / pose landmarks
// ────────────────────────────────────────────────────────────────────────────

/// A normalized 2-D landmark coordinate ([0,1] image space, y grows downward).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MouthLandmarks {
    pub left: Landmark,
    pub right: Landmark,
    pub top: Landmark,
    pub bottom: Landmark,
}

/// Face landmarks for one frame. Eye contours carry 8 points each, starting
/// at the outer corner with the inner corner fourth, matching the estimator's
/// contour ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct FaceLandmarks {
    pub left_eye: Vec<Landmark>,
    pub right_eye: Vec<Landmark>,
    pub mouth: MouthLandmarks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoseLandmarks {
    pub left_shoulder: Landmark,
    pub right_shoulder: Landmark,
    pub left_hip: Landmark,
    pub right_hip: Landmark,
    pub left_wrist: Landmark,
    pub right_wrist: Landmark,
}

/// Per-frame estimator output. Either detection may be absent; an absent
/// detection skips that frame's contribution rather than failing the call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameLandmarks {
    pub face: Option<FaceLandmarks>,
    pub pose: Option<PoseLandmarks>,
}

#[async_trait]
pub trait LandmarkEstimator: Send + Sync {
    async fn estimate(&self, frame: &VideoFrame) -> Result<FrameLandmarks, CollaboratorError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Sentiment
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Polarity of `text` in [-1.0, 1.0].
    async fn polarity(&self, text: &str) -> Result<f64, CollaboratorError>;
}
