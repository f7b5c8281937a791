mod collaborators;
mod config;
mod errors;
mod media;
mod report;
mod resume;
mod routes;
mod session;
mod state;
mod text;
mod video;
mod voice;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::collaborators::landmarks::LandmarkServiceClient;
use crate::collaborators::languagetool::LanguageToolClient;
use crate::collaborators::sentiment::LexiconSentiment;
use crate::collaborators::speech::SpeechGatewayClient;
use crate::collaborators::TextChecker;
use crate::config::Config;
use crate::resume::analyzer::ResumeAnalyzer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::text::analyzer::TextAnalyzer;
use crate::video::analyzer::VideoAnalyzer;
use crate::voice::analyzer::VoiceAnalyzer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Podium API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize recognition collaborators
    let checker: Arc<dyn TextChecker> =
        Arc::new(LanguageToolClient::new(config.languagetool_url.clone()));
    info!("LanguageTool client initialized");

    let transcriber = Arc::new(SpeechGatewayClient::new(config.speech_service_url.clone()));
    info!("Speech gateway client initialized");

    let estimator = Arc::new(LandmarkServiceClient::new(
        config.landmark_service_url.clone(),
    ));
    info!("Landmark service client initialized");

    // Build app state
    let state = AppState {
        config: config.clone(),
        resume_analyzer: Arc::new(ResumeAnalyzer::new(Arc::new(LexiconSentiment))),
        text_analyzer: Arc::new(TextAnalyzer::new(checker.clone())),
        voice_analyzer: Arc::new(VoiceAnalyzer::new(transcriber, checker)),
        video_analyzer: Arc::new(VideoAnalyzer::new(estimator)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
