use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::collaborators::CollaboratorError;

/// Error raised inside an analyzer pipeline. Never crosses an `analyze`
/// entry point — callers always receive an [`AnalysisReport`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Bad or unusable input (text too short, unreadable file, unintelligible audio).
    #[error("{0}")]
    Input(String),

    /// An external recognition service failed.
    #[error("{0}")]
    Collaborator(#[from] CollaboratorError),
}

/// Success/failure envelope returned by every analyzer.
///
/// Built only through [`AnalysisReport::success`] and
/// [`AnalysisReport::failure`], so a failed analysis can never carry score
/// fields. The report body is flattened into the envelope on serialization.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analyzed_at: Option<DateTime<Utc>>,
    // a flattened `None` contributes no fields
    #[serde(flatten)]
    report: Option<T>,
}

impl<T: Serialize> AnalysisReport<T> {
    pub fn success(report: T) -> Self {
        Self {
            success: true,
            error: None,
            report_id: Some(Uuid::new_v4()),
            analyzed_at: Some(Utc::now()),
            report: Some(report),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            report_id: None,
            analyzed_at: None,
            report: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self) -> Option<&T> {
        self.report.as_ref()
    }
}

impl<T: Serialize> From<Result<T, AnalysisError>> for AnalysisReport<T> {
    fn from(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(report) => Self::success(report),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Rounds a score to two decimals for report output.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
