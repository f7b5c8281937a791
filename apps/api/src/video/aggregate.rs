//! Folds per-frame geometry samples into the four presentation sub-scores.

use crate::video::geometry::{ExpressionSample, PostureSample};

/// Eye-contact fraction is taken over the full frame budget, not the frames
/// actually read, so short or sparsely detected clips land in a lower band.
pub(crate) fn eye_contact_score(qualifying_frames: usize, frame_budget: usize) -> f64 {
    if qualifying_frames == 0 || frame_budget == 0 {
        return 0.0;
    }
    let pct = qualifying_frames as f64 / frame_budget as f64 * 100.0;
    if pct >= 70.0 {
        90.0
    } else if pct >= 50.0 {
        75.0
    } else if pct >= 30.0 {
        60.0
    } else {
        40.0
    }
}

/// Shoulder-level and spine sub-scores lose a point per thousandth of
/// normalized-height delta, are averaged across frames, then averaged
/// together. No pose data at all scores a neutral 50.
pub(crate) fn posture_score(samples: &[PostureSample]) -> f64 {
    if samples.is_empty() {
        return 50.0;
    }
    let n = samples.len() as f64;
    let shoulder: f64 = samples
        .iter()
        .map(|s| (100.0 - 1000.0 * s.shoulder_alignment).max(0.0))
        .sum::<f64>()
        / n;
    let spine: f64 = samples
        .iter()
        .map(|s| (100.0 - 1000.0 * s.spine_straightness).max(0.0))
        .sum::<f64>()
        / n;
    (shoulder + spine) / 2.0
}

/// Gesturing in 30-60% of sampled frames reads as engaged; far outside that
/// window reads as stiff or distracting.
pub(crate) fn gesture_score(flags: &[bool]) -> f64 {
    if flags.is_empty() {
        return 50.0;
    }
    let pct = flags.iter().filter(|&&g| g).count() as f64 / flags.len() as f64 * 100.0;
    if (30.0..=60.0).contains(&pct) {
        85.0
    } else if (20.0..30.0).contains(&pct) || (pct > 60.0 && pct <= 70.0) {
        70.0
    } else if pct > 70.0 {
        60.0
    } else {
        40.0
    }
}

/// Smiling in 20-50% of sampled frames reads as natural; above that as
/// possibly forced.
pub(crate) fn expression_score(samples: &[ExpressionSample]) -> f64 {
    if samples.is_empty() {
        return 50.0;
    }
    let pct =
        samples.iter().filter(|s| s.smiling).count() as f64 / samples.len() as f64 * 100.0;
    if (20.0..=50.0).contains(&pct) {
        80.0
    } else if pct > 50.0 {
        65.0
    } else {
        40.0
    }
}
