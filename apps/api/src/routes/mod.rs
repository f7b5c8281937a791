pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers::handle_analyze_resume;
use crate::session::handlers::handle_assess_session;
use crate::state::AppState;
use crate::text::handlers::handle_analyze_text;
use crate::video::handlers::handle_analyze_video;
use crate::voice::handlers::handle_analyze_voice;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analysis/resume", post(handle_analyze_resume))
        .route("/api/v1/analysis/text", post(handle_analyze_text))
        .route("/api/v1/analysis/voice", post(handle_analyze_voice))
        .route("/api/v1/analysis/video", post(handle_analyze_video))
        .route("/api/v1/analysis/session", post(handle_assess_session))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}
