//! Prosody features from the raw waveform: speaking rate, pauses, and an
//! energy-steadiness confidence proxy. Frames are short-time RMS windows;
//! voiced segments are runs of frames above a silence threshold pegged
//! 30 dB under the loudest frame.

use serde::Serialize;
use tracing::warn;

use crate::media::AudioClip;
use crate::report::round2;

const FRAME_LEN: usize = 2048;
const HOP_LEN: usize = 512;
const SILENCE_FLOOR_DB: f64 = 30.0;

/// Voiced segments per estimated spoken word. A rough rate proxy tuned
/// against recorded interview answers.
const SEGMENTS_PER_WORD: f64 = 10.0;

#[derive(Debug, Clone, Serialize)]
pub struct ProsodyFeatures {
    pub duration_seconds: f64,
    pub estimated_wpm: f64,
    pub pace_score: f64,
    pub pause_count: usize,
    pub pause_score: f64,
    pub confidence_score: f64,
}

impl ProsodyFeatures {
    /// Neutral defaults used when the waveform carries nothing to measure.
    pub(crate) fn neutral() -> Self {
        Self {
            duration_seconds: 0.0,
            estimated_wpm: 0.0,
            pace_score: 50.0,
            pause_count: 0,
            pause_score: 50.0,
            confidence_score: 50.0,
        }
    }
}

pub(crate) fn extract(clip: &AudioClip) -> ProsodyFeatures {
    if clip.samples.is_empty() || clip.sample_rate_hz == 0 {
        warn!("audio clip has no usable samples, using neutral prosody defaults");
        return ProsodyFeatures::neutral();
    }

    let duration = clip.duration_seconds();
    let rms = frame_rms(&clip.samples);
    let segments = voiced_segment_count(&rms);

    let words = segments as f64 / SEGMENTS_PER_WORD;
    let wpm = if duration > 0.0 {
        words / duration * 60.0
    } else {
        0.0
    };

    let pause_count = segments.saturating_sub(1);
    let pause_score = (100.0 - 5.0 * pause_count as f64).max(0.0);
    let confidence_score = (100.0 - variance(&rms) * 100.0).clamp(0.0, 100.0);

    ProsodyFeatures {
        duration_seconds: round2(duration),
        estimated_wpm: round2(wpm),
        pace_score: pace_band(wpm),
        pause_count,
        pause_score,
        confidence_score: round2(confidence_score),
    }
}

/// 120-150 wpm is the interview sweet spot; 100-120 and 150-180 are close
/// enough to coach rather than penalize.
fn pace_band(wpm: f64) -> f64 {
    if (120.0..=150.0).contains(&wpm) {
        100.0
    } else if (100.0..120.0).contains(&wpm) || (wpm > 150.0 && wpm <= 180.0) {
        70.0
    } else {
        50.0
    }
}

fn frame_rms(samples: &[f32]) -> Vec<f64> {
    let mut rms = Vec::with_capacity(samples.len() / HOP_LEN + 1);
    let mut start = 0;
    while start < samples.len() {
        let end = (start + FRAME_LEN).min(samples.len());
        let frame = &samples[start..end];
        let energy: f64 = frame.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
        rms.push((energy / frame.len() as f64).sqrt());
        start += HOP_LEN;
    }
    rms
}

fn voiced_segment_count(rms: &[f64]) -> usize {
    let peak = rms.iter().copied().fold(0.0_f64, f64::max);
    let threshold = peak * 10.0_f64.powf(-SILENCE_FLOOR_DB / 20.0);

    let mut segments = 0;
    let mut in_segment = false;
    for &value in rms {
        if value > threshold {
            if !in_segment {
                segments += 1;
                in_segment = true;
            }
        } else {
            in_segment = false;
        }
    }
    segments
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_clip(samples: Vec<f32>) -> AudioClip {
        AudioClip {
            sample_rate_hz: 16_000,
            samples,
        }
    }

    #[test]
    fn test_empty_clip_falls_back_to_neutral() {
        let features = extract(&make_clip(vec![]));
        assert!((features.duration_seconds - 0.0).abs() < f64::EPSILON);
        assert!((features.pace_score - 50.0).abs() < f64::EPSILON);
        assert!((features.pause_score - 50.0).abs() < f64::EPSILON);
        assert!((features.confidence_score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_sample_rate_falls_back_to_neutral() {
        let clip = AudioClip {
            sample_rate_hz: 0,
            samples: vec![0.5; 1024],
        };
        let features = extract(&clip);
        assert!((features.estimated_wpm - 0.0).abs() < f64::EPSILON);
        assert!((features.confidence_score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_silence_has_no_voiced_segments() {
        let features = extract(&make_clip(vec![0.0; 32_000]));
        assert_eq!(features.pause_count, 0);
        assert!((features.estimated_wpm - 0.0).abs() < f64::EPSILON);
        assert!((features.pace_score - 50.0).abs() < f64::EPSILON);
        // no pauses detected, so the pause score stays at its ceiling
        assert!((features.pause_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bursts_separated_by_silence_count_as_segments() {
        // two loud bursts with a gap wide enough that whole frames go quiet
        let mut samples = vec![0.5_f32; 4096];
        samples.extend(vec![0.0_f32; 8192]);
        samples.extend(vec![0.5_f32; 4096]);
        let features = extract(&make_clip(samples));
        assert_eq!(features.pause_count, 1);
        assert!((features.pause_score - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_steady_energy_scores_full_confidence() {
        let features = extract(&make_clip(vec![0.5; 32_000]));
        assert!((features.confidence_score - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uneven_energy_lowers_confidence() {
        let mut samples = vec![0.9_f32; 16_000];
        samples.extend(vec![0.05_f32; 16_000]);
        let features = extract(&make_clip(samples));
        assert!(features.confidence_score < 100.0);
    }

    #[test]
    fn test_pace_bands() {
        assert!((pace_band(135.0) - 100.0).abs() < f64::EPSILON);
        assert!((pace_band(120.0) - 100.0).abs() < f64::EPSILON);
        assert!((pace_band(110.0) - 70.0).abs() < f64::EPSILON);
        assert!((pace_band(165.0) - 70.0).abs() < f64::EPSILON);
        assert!((pace_band(60.0) - 50.0).abs() < f64::EPSILON);
        assert!((pace_band(240.0) - 50.0).abs() < f64::EPSILON);
    }
}
