//! Drives frames through the landmark estimator and folds the per-frame
//! geometry into presentation scores. A frame with no detections or a
//! failed estimation skips that frame's contribution; only an empty stream
//! fails the whole analysis.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::collaborators::LandmarkEstimator;
use crate::media::FrameSource;
use crate::report::{round2, AnalysisError, AnalysisReport};
use crate::video::aggregate;
use crate::video::geometry::{self, ExpressionSample, PostureSample};

pub const DEFAULT_FRAME_BUDGET: usize = 300;
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

#[derive(Debug, Clone, Serialize)]
pub struct VideoReport {
    pub eye_contact_score: f64,
    pub posture_score: f64,
    pub gesture_score: f64,
    pub expression_score: f64,
    pub overall_score: f64,
    pub frames_analyzed: usize,
    pub total_frames: usize,
    pub duration_seconds: f64,
    pub feedback: String,
    pub recommendations: Vec<String>,
}

pub struct VideoAnalyzer {
    estimator: Arc<dyn LandmarkEstimator>,
}

impl VideoAnalyzer {
    pub fn new(estimator: Arc<dyn LandmarkEstimator>) -> Self {
        Self { estimator }
    }

    pub async fn analyze(
        &self,
        source: &mut dyn FrameSource,
        frame_rate: f64,
        max_frames: usize,
    ) -> AnalysisReport<VideoReport> {
        match self.run(source, frame_rate, max_frames).await {
            Ok(report) => AnalysisReport::success(report),
            Err(e) => {
                warn!(error = %e, "video analysis failed");
                AnalysisReport::failure(e.to_string())
            }
        }
    }

    async fn run(
        &self,
        source: &mut dyn FrameSource,
        frame_rate: f64,
        max_frames: usize,
    ) -> Result<VideoReport, AnalysisError> {
        let total_frames = source.total_frames();
        if total_frames == 0 {
            return Err(AnalysisError::Input(
                "No frames could be decoded from the video stream".to_string(),
            ));
        }

        let mut eye_contact_frames = 0usize;
        let mut posture_samples: Vec<PostureSample> = Vec::new();
        let mut gesture_flags: Vec<bool> = Vec::new();
        let mut expression_samples: Vec<ExpressionSample> = Vec::new();
        let mut frames_analyzed = 0usize;

        while frames_analyzed < max_frames {
            let frame = match source.next_frame() {
                Some(frame) => frame,
                None => break,
            };
            frames_analyzed += 1;

            let landmarks = match self.estimator.estimate(&frame).await {
                Ok(landmarks) => landmarks,
                Err(e) => {
                    warn!(frame = frame.index, error = %e, "landmark estimation failed");
                    continue;
                }
            };

            if let Some(face) = &landmarks.face {
                if geometry::is_eye_contact(face) {
                    eye_contact_frames += 1;
                }
                expression_samples.push(geometry::expression_sample(face));
            }
            if let Some(pose) = &landmarks.pose {
                posture_samples.push(geometry::posture_sample(pose));
                gesture_flags.push(geometry::is_gesturing(pose));
            }
        }

        let eye_contact = aggregate::eye_contact_score(eye_contact_frames, max_frames);
        let posture = aggregate::posture_score(&posture_samples);
        let gesture = aggregate::gesture_score(&gesture_flags);
        let expression = aggregate::expression_score(&expression_samples);
        let overall = 0.4 * eye_contact + 0.3 * posture + 0.2 * gesture + 0.1 * expression;

        let duration_seconds = if frame_rate > 0.0 {
            total_frames as f64 / frame_rate
        } else {
            0.0
        };

        Ok(VideoReport {
            eye_contact_score: round2(eye_contact),
            posture_score: round2(posture),
            gesture_score: round2(gesture),
            expression_score: round2(expression),
            overall_score: round2(overall),
            frames_analyzed,
            total_frames,
            duration_seconds: round2(duration_seconds),
            feedback: feedback(eye_contact, posture, gesture, expression, duration_seconds),
            recommendations: recommendations(overall),
        })
    }
}

fn feedback(eye: f64, posture: f64, gesture: f64, expression: f64, duration: f64) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(5);

    lines.push(if eye >= 80.0 {
        "Excellent eye contact with the camera."
    } else if eye >= 60.0 {
        "Good eye contact, maintain it consistently."
    } else {
        "Improve eye contact by looking at the camera more."
    });

    lines.push(if posture >= 80.0 {
        "Great posture - you appear confident and professional."
    } else if posture >= 60.0 {
        "Good posture overall."
    } else {
        "Try to sit up straight for better presence."
    });

    lines.push(if gesture >= 80.0 {
        "Effective use of hand gestures."
    } else if gesture >= 60.0 {
        "Good gesture usage."
    } else {
        "Try using hand gestures to emphasize points."
    });

    lines.push(if expression >= 80.0 {
        "Natural and positive facial expressions."
    } else if expression >= 60.0 {
        "Good facial expressions."
    } else {
        "Try to smile naturally to appear more approachable."
    });

    lines.push(if (60.0..=120.0).contains(&duration) {
        "Perfect answer length."
    } else if duration < 60.0 {
        "Consider giving more detailed answers."
    } else {
        "Try to be more concise in your answers."
    });

    lines.join(" ")
}

fn recommendations(overall: f64) -> Vec<String> {
    let picks: &[&str] = if overall >= 80.0 {
        &[
            "You're interview-ready! Maintain your current approach.",
            "Practice with different types of questions.",
            "Record mock interviews regularly to stay sharp.",
        ]
    } else if overall >= 60.0 {
        &[
            "Focus on maintaining consistent eye contact.",
            "Practice your posture in front of a mirror.",
            "Work on speaking clearly and confidently.",
            "Record yourself answering common interview questions.",
        ]
    } else {
        &[
            "Practice basic interview questions daily.",
            "Work on maintaining eye contact with the camera.",
            "Record and review your practice sessions.",
            "Focus on speaking clearly and at a moderate pace.",
            "Practice good posture while sitting.",
        ]
    };
    picks.iter().map(|s| s.to_string()).collect()
}
