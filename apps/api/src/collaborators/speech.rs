//! Speech gateway client — the speech-to-text backend for `Transcriber`.
//!
//! Ships the clip to the recognition gateway as a PCM16 WAV body. A 422 from
//! the gateway means the audio was not understood, which is a distinct signal
//! from a service failure: the analyzer reports it to the candidate instead
//! of treating it as an outage.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::collaborators::{CollaboratorError, Transcriber};
use crate::media::{wav, AudioClip};

const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct SpeechGatewayClient {
    client: Client,
    base_url: String,
}

impl SpeechGatewayClient {
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
impl Transcriber for SpeechGatewayClient {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Option<String>, CollaboratorError> {
        let url = format!("{}/v1/transcribe", self.base_url.trim_end_matches('/'));
        let body = wav::encode_pcm16(clip);

        debug!(
            samples = clip.samples.len(),
            sample_rate_hz = clip.sample_rate_hz,
            "sending clip for transcription"
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "audio/wav")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CollaboratorError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: TranscribeResponse = serde_json::from_str(&body)?;

        let transcript = parsed.transcript.trim().to_string();
        if transcript.is_empty() {
            return Ok(None);
        }
        Ok(Some(transcript))
    }
}

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    transcript: String,
}
