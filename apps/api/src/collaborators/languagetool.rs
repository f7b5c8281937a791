//! LanguageTool client — the grammar/spell checker backend for `TextChecker`.
//!
//! Talks to a self-hosted LanguageTool server via `POST /v2/check`. No
//! automatic retry: a failed check fails the analysis that requested it.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::collaborators::{CollaboratorError, GrammarIssue, TextChecker};

const CHECK_LANGUAGE: &str = "en-US";
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct LanguageToolClient {
    client: Client,
    base_url: String,
}

impl LanguageToolClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl TextChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
        let url = format!("{}/v2/check", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .form(&[("text", text), ("language", CHECK_LANGUAGE)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CollaboratorError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: CheckResponse = serde_json::from_str(&body)?;

        debug!(issues = parsed.matches.len(), "grammar check complete");

        Ok(parsed.matches.into_iter().map(GrammarIssue::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<CheckMatch>,
}

#[derive(Debug, Deserialize)]
struct CheckMatch {
    message: String,
    rule: CheckRule,
}

#[derive(Debug, Deserialize)]
struct CheckRule {
    id: String,
    #[serde(rename = "issueType", default)]
    issue_type: String,
}

impl From<CheckMatch> for GrammarIssue {
    fn from(m: CheckMatch) -> Self {
        GrammarIssue {
            rule_id: m.rule.id,
            issue_type: m.rule.issue_type,
            message: m.message,
        }
    }
}
