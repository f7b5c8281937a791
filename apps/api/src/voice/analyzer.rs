//! Scores a spoken answer: transcribe, grade the transcript with the shared
//! text metrics, and fold in prosody features measured from the waveform.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::collaborators::{TextChecker, Transcriber};
use crate::media::AudioClip;
use crate::report::{round2, AnalysisError, AnalysisReport};
use crate::text::metrics;
use crate::voice::prosody::{self, ProsodyFeatures};

const NO_TRANSCRIPT_MESSAGE: &str = "Could not transcribe audio. Please speak clearly.";

#[derive(Debug, Clone, Serialize)]
pub struct VoiceReport {
    pub transcription: String,
    pub text_analysis: VoiceTextAnalysis,
    pub audio_features: ProsodyFeatures,
    pub overall_score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceTextAnalysis {
    pub grammar_errors: usize,
    pub grammar_score: f64,
    pub fluency_score: f64,
    pub clarity_score: f64,
    pub relevance_score: f64,
}

pub struct VoiceAnalyzer {
    transcriber: Arc<dyn Transcriber>,
    checker: Arc<dyn TextChecker>,
}

impl VoiceAnalyzer {
    pub fn new(transcriber: Arc<dyn Transcriber>, checker: Arc<dyn TextChecker>) -> Self {
        Self {
            transcriber,
            checker,
        }
    }

    pub async fn analyze(&self, question: &str, clip: &AudioClip) -> AnalysisReport<VoiceReport> {
        match self.run(question, clip).await {
            Ok(report) => AnalysisReport::success(report),
            Err(e) => {
                warn!(error = %e, "voice analysis failed");
                AnalysisReport::failure(e.to_string())
            }
        }
    }

    async fn run(&self, question: &str, clip: &AudioClip) -> Result<VoiceReport, AnalysisError> {
        // a transcription outage reads the same as unintelligible speech:
        // the caller can only retry with a clearer recording
        let transcription = match self.transcriber.transcribe(clip).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => return Err(AnalysisError::Input(NO_TRANSCRIPT_MESSAGE.to_string())),
            Err(e) => {
                warn!(error = %e, "transcription service failed");
                return Err(AnalysisError::Input(NO_TRANSCRIPT_MESSAGE.to_string()));
            }
        };

        let issues = self.checker.check(&transcription).await?;
        let grammar_errors = issues.len();
        let grammar = metrics::grammar_score(grammar_errors);
        let clarity = metrics::clarity_score(&transcription);
        let relevance = metrics::relevance_score(question, &transcription);
        let fluency = fluency_score(&transcription);

        let audio_features = prosody::extract(clip);
        let overall = 0.3 * clarity
            + 0.3 * fluency
            + 0.2 * audio_features.confidence_score
            + 0.2 * audio_features.pace_score;

        let feedback = feedback(grammar_errors, fluency, &audio_features);

        Ok(VoiceReport {
            transcription,
            text_analysis: VoiceTextAnalysis {
                grammar_errors,
                grammar_score: round2(grammar),
                fluency_score: round2(fluency),
                clarity_score: round2(clarity),
                relevance_score: round2(relevance),
            },
            audio_features,
            overall_score: round2(overall),
            feedback,
        })
    }
}

/// Sentence-length fluency heuristic over the transcript. Transcripts are
/// period-punctuated by the speech service, so only '.' delimits here.
fn fluency_score(transcript: &str) -> f64 {
    let parts: Vec<&str> = transcript.split('.').collect();
    if parts.len() < 2 {
        return 50.0;
    }
    let lengths: Vec<usize> = parts
        .iter()
        .map(|s| s.split_whitespace().count())
        .filter(|&n| n > 0)
        .collect();
    if lengths.len() < 2 {
        return 60.0;
    }
    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    if (10.0..=20.0).contains(&mean) {
        80.0
    } else if (5.0..10.0).contains(&mean) || (mean > 20.0 && mean <= 25.0) {
        70.0
    } else {
        60.0
    }
}

fn feedback(grammar_errors: usize, fluency: f64, audio: &ProsodyFeatures) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(5);

    lines.push(match grammar_errors {
        0 => "Excellent grammar in your speech!".to_string(),
        n if n <= 2 => format!("Good grammar with {} minor errors.", n),
        n => format!("Grammar needs improvement: {} errors found.", n),
    });

    lines.push(
        if fluency >= 80.0 {
            "Very fluent speech delivery."
        } else if fluency >= 60.0 {
            "Good fluency, could be more natural."
        } else {
            "Work on speaking more fluently without pauses."
        }
        .to_string(),
    );

    lines.push(
        if (120.0..=150.0).contains(&audio.estimated_wpm) {
            "Perfect speaking pace."
        } else if audio.estimated_wpm < 120.0 {
            "Try speaking a bit faster."
        } else {
            "Try speaking a bit slower for better clarity."
        }
        .to_string(),
    );

    lines.push(
        if audio.confidence_score >= 80.0 {
            "You sound confident!"
        } else if audio.confidence_score >= 60.0 {
            "Good confidence level."
        } else {
            "Try to speak with more confidence."
        }
        .to_string(),
    );

    lines.push(
        match audio.pause_count {
            0..=2 => "Good use of pauses.",
            3..=5 => "Moderate use of pauses.",
            _ => "Too many pauses. Try to speak more continuously.",
        }
        .to_string(),
    );

    lines.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{CollaboratorError, GrammarIssue};
    use async_trait::async_trait;

    struct FixedTranscriber {
        transcript: Option<String>,
    }

    #[async_trait]
    impl Transcriber for FixedTranscriber {
        async fn transcribe(&self, _clip: &AudioClip) -> Result<Option<String>, CollaboratorError> {
            Ok(self.transcript.clone())
        }
    }

    struct FailingTranscriber;

    #[async_trait]
    impl Transcriber for FailingTranscriber {
        async fn transcribe(&self, _clip: &AudioClip) -> Result<Option<String>, CollaboratorError> {
            Err(CollaboratorError::Api {
                status: 500,
                message: "speech service down".to_string(),
            })
        }
    }

    struct CleanChecker;

    #[async_trait]
    impl TextChecker for CleanChecker {
        async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
            Ok(vec![])
        }
    }

    fn make_clip() -> AudioClip {
        AudioClip {
            sample_rate_hz: 16_000,
            samples: vec![0.4; 48_000],
        }
    }

    fn make_analyzer(transcript: Option<&str>) -> VoiceAnalyzer {
        VoiceAnalyzer::new(
            Arc::new(FixedTranscriber {
                transcript: transcript.map(str::to_string),
            }),
            Arc::new(CleanChecker),
        )
    }

    #[tokio::test]
    async fn test_untranscribable_audio_reports_guidance() {
        let analyzer = make_analyzer(None);
        let report = analyzer.analyze("q", &make_clip()).await;
        assert!(!report.is_success());
        assert_eq!(report.error(), Some(NO_TRANSCRIPT_MESSAGE));
    }

    #[tokio::test]
    async fn test_blank_transcript_reports_guidance() {
        let analyzer = make_analyzer(Some("   "));
        let report = analyzer.analyze("q", &make_clip()).await;
        assert!(!report.is_success());
        assert_eq!(report.error(), Some(NO_TRANSCRIPT_MESSAGE));
    }

    #[tokio::test]
    async fn test_transcriber_outage_reads_as_unintelligible() {
        let analyzer = VoiceAnalyzer::new(Arc::new(FailingTranscriber), Arc::new(CleanChecker));
        let report = analyzer.analyze("q", &make_clip()).await;
        assert!(!report.is_success());
        assert_eq!(report.error(), Some(NO_TRANSCRIPT_MESSAGE));
    }

    #[tokio::test]
    async fn test_transcript_is_scored_and_echoed() {
        let transcript = "I led the migration of our billing system to a new platform. \
                          The project took six months and shipped without customer downtime. \
                          We measured a thirty percent cost reduction afterwards.";
        let analyzer = make_analyzer(Some(transcript));
        let report = analyzer.analyze("Tell me about a project you led", &make_clip()).await;

        assert!(report.is_success());
        let report = report.report().unwrap();
        assert_eq!(report.transcription, transcript);
        assert_eq!(report.text_analysis.grammar_errors, 0);
        assert!((report.text_analysis.grammar_score - 100.0).abs() < f64::EPSILON);
        // steady synthetic tone reads as fully confident
        assert!((report.audio_features.confidence_score - 100.0).abs() < f64::EPSILON);
        assert!(report.overall_score > 0.0 && report.overall_score <= 100.0);
        assert!(report.feedback.contains("Excellent grammar in your speech!"));
    }

    #[test]
    fn test_fluency_needs_multiple_sentences() {
        assert!((fluency_score("no terminator here") - 50.0).abs() < f64::EPSILON);
        assert!((fluency_score("Only one sentence.") - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fluency_rewards_medium_sentences() {
        let transcript = "one two three four five six seven eight nine ten eleven. \
                          one two three four five six seven eight nine ten eleven twelve.";
        assert!((fluency_score(transcript) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fluency_short_sentences_band() {
        assert!((fluency_score("Yes sir. No sir. Maybe so sir.") - 60.0).abs() < f64::EPSILON);
    }
}
