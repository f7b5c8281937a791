//! Per-frame landmark geometry: eye aspect ratio, posture height deltas,
//! and gesture/smile flags. Coordinates are normalized image space with
//! y growing downward.

use crate::collaborators::{FaceLandmarks, Landmark, PoseLandmarks};

/// Eyes more open than this aspect ratio count as looking at the camera.
pub(crate) const EYE_OPEN_EAR: f64 = 0.2;

/// Mouth wider than this multiple of its height reads as a smile.
pub(crate) const SMILE_WIDTH_RATIO: f64 = 2.0;

fn distance(a: Landmark, b: Landmark) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Eye aspect ratio over the eye contour: vertical opening over horizontal
/// width. Uses the first six contour points; degenerate contours yield 0.
pub(crate) fn eye_aspect_ratio(points: &[Landmark]) -> f64 {
    if points.len() < 6 {
        return 0.0;
    }
    let vertical_a = distance(points[1], points[5]);
    let vertical_b = distance(points[2], points[4]);
    let horizontal = distance(points[0], points[3]);
    if horizontal == 0.0 {
        return 0.0;
    }
    (vertical_a + vertical_b) / (2.0 * horizontal)
}

pub(crate) fn is_eye_contact(face: &FaceLandmarks) -> bool {
    eye_aspect_ratio(&face.left_eye) > EYE_OPEN_EAR
        && eye_aspect_ratio(&face.right_eye) > EYE_OPEN_EAR
}

/// Height deltas for one frame. Smaller is straighter.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PostureSample {
    pub shoulder_alignment: f64,
    #[allow(dead_code)] // measured but not folded into the score
    pub hip_alignment: f64,
    pub spine_straightness: f64,
}

pub(crate) fn posture_sample(pose: &PoseLandmarks) -> PostureSample {
    let shoulder_mid = (pose.left_shoulder.y + pose.right_shoulder.y) / 2.0;
    let hip_mid = (pose.left_hip.y + pose.right_hip.y) / 2.0;
    PostureSample {
        shoulder_alignment: (pose.left_shoulder.y - pose.right_shoulder.y).abs(),
        hip_alignment: (pose.left_hip.y - pose.right_hip.y).abs(),
        spine_straightness: (shoulder_mid - hip_mid).abs(),
    }
}

/// Either wrist above its shoulder reads as an active hand gesture.
pub(crate) fn is_gesturing(pose: &PoseLandmarks) -> bool {
    pose.left_wrist.y < pose.left_shoulder.y || pose.right_wrist.y < pose.right_shoulder.y
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ExpressionSample {
    pub smiling: bool,
    pub mouth_openness: f64,
}

pub(crate) fn expression_sample(face: &FaceLandmarks) -> ExpressionSample {
    let width = distance(face.mouth.left, face.mouth.right);
    let height = distance(face.mouth.top, face.mouth.bottom);
    ExpressionSample {
        smiling: height > 0.0 && width / height > SMILE_WIDTH_RATIO,
        mouth_openness: height,
    }
}
