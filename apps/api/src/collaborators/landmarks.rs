//! Landmark service client — the face/pose estimator backend for
//! `LandmarkEstimator`. Posts one JPEG-encoded frame per call and receives
//! normalized landmark coordinates; missing detections come back as nulls.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::debug;

use crate::collaborators::{CollaboratorError, FrameLandmarks, LandmarkEstimator};
use crate::media::VideoFrame;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct LandmarkServiceClient {
    client: Client,
    base_url: String,
}

impl LandmarkServiceClient {
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
impl LandmarkEstimator for LandmarkServiceClient {
    async fn estimate(&self, frame: &VideoFrame) -> Result<FrameLandmarks, CollaboratorError> {
        let url = format!("{}/v1/estimate", self.base_url.trim_end_matches('/'));

        debug!(frame = frame.index, bytes = frame.data.len(), "estimating landmarks");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "image/jpeg")
            .body(frame.data.clone())
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
        let landmarks: FrameLandmarks = serde_json::from_str(&body)?;
        Ok(landmarks)
    }
}
