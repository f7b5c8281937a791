use std::sync::Arc;

use crate::config::Config;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::text::analyzer::TextAnalyzer;
use crate::video::analyzer::VideoAnalyzer;
use crate::voice::analyzer::VoiceAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resume_analyzer: Arc<ResumeAnalyzer>,
    pub text_analyzer: Arc<TextAnalyzer>,
    pub voice_analyzer: Arc<VoiceAnalyzer>,
    pub video_analyzer: Arc<VideoAnalyzer>,
}
