//! REST API client for the avatar video-generation vendor.
//!
//! Wraps the two endpoints the pipeline needs (job submission and
//! status lookup) using [`reqwest`]. Credentials travel in an
//! `X-Api-Key` header.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::NarratorError;
use crate::job::{JobId, JobStatus};
use crate::service::VideoService;
use crate::settings::RenderSettings;

/// Vendor error code signaling the daily generation cap.
pub const QUOTA_ERROR_CODE: &str = "trial_video_limit_exceeded";

/// Connection settings for the video vendor, supplied explicitly at
/// construction (no ambient environment reads here).
#[derive(Debug, Clone)]
pub struct AvatarApiConfig {
    /// Base URL, e.g. `https://api.heygen.com`.
    pub api_url: String,
    /// API-key credential.
    pub api_key: String,
}

/// HTTP client for the video-generation vendor.
pub struct AvatarApi {
    client: reqwest::Client,
    config: AvatarApiConfig,
}

// ---- wire types ----

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    data: Option<SubmitData>,
}

#[derive(Debug, Deserialize)]
struct SubmitData {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    data: Option<StatusData>,
}

#[derive(Debug, Deserialize)]
struct StatusData {
    status: String,
    video_url: Option<String>,
}

/// Error envelope the vendor attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct VendorErrorBody {
    error: Option<VendorError>,
}

#[derive(Debug, Deserialize)]
struct VendorError {
    code: Option<String>,
    message: Option<String>,
}

impl AvatarApi {
    /// Create a new API client for the configured vendor.
    pub fn new(config: AvatarApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (connection pooling across vendor clients).
    pub fn with_client(client: reqwest::Client, config: AvatarApiConfig) -> Self {
        Self { client, config }
    }

    /// Submit narration input for rendering.
    ///
    /// Sends `POST /v2/video/generate` with the avatar/voice/frame
    /// settings and the narration text. Returns the vendor-assigned job
    /// identifier.
    pub async fn submit(
        &self,
        input_text: &str,
        settings: &RenderSettings,
    ) -> Result<JobId, NarratorError> {
        let body = submit_payload(input_text, settings);

        let response = self
            .client
            .post(format!("{}/v2/video/generate", self.config.api_url))
            .header("X-Api-Key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(classify_submit_failure(status.as_u16(), body));
        }

        let parsed: SubmitResponse = response.json().await?;
        let video_id = parsed
            .data
            .and_then(|data| data.video_id)
            .ok_or(NarratorError::MalformedResponse("data.video_id"))?;

        tracing::info!(video_id = %video_id, "Narration job submitted");
        Ok(JobId::new(video_id))
    }

    /// Query the status of a submitted job.
    ///
    /// Sends `GET /v1/video_status.get?video_id={id}` and maps the
    /// vendor status onto [`JobStatus`].
    pub async fn status(&self, job: &JobId) -> Result<JobStatus, NarratorError> {
        let response = self
            .client
            .get(format!("{}/v1/video_status.get", self.config.api_url))
            .query(&[("video_id", job.as_str())])
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NarratorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: StatusResponse = response.json().await?;
        let data = parsed
            .data
            .ok_or(NarratorError::MalformedResponse("data.status"))?;
        JobStatus::from_vendor(&data.status, data.video_url)
    }
}

#[async_trait]
impl VideoService for AvatarApi {
    async fn submit(
        &self,
        input_text: &str,
        settings: &RenderSettings,
    ) -> Result<JobId, NarratorError> {
        AvatarApi::submit(self, input_text, settings).await
    }

    async fn status(&self, job: &JobId) -> Result<JobStatus, NarratorError> {
        AvatarApi::status(self, job).await
    }
}

/// Build the submission payload: the narration text plus the fixed
/// avatar/voice/frame settings.
fn submit_payload(input_text: &str, settings: &RenderSettings) -> serde_json::Value {
    serde_json::json!({
        "video_inputs": [
            {
                "character": {
                    "type": "avatar",
                    "avatar_id": settings.avatar_id,
                    "avatar_style": settings.avatar_style,
                },
                "voice": {
                    "type": "text",
                    "input_text": input_text,
                    "voice_id": settings.voice_id,
                },
                "background": {
                    "type": "color",
                    "value": settings.background_color,
                },
            }
        ],
        "dimension": {
            "width": settings.width,
            "height": settings.height,
        },
        "aspect_ratio": settings.aspect_ratio,
        "test": settings.test_mode,
    })
}

/// Classify a non-2xx submission response.
///
/// The quota condition is recognized by the vendor error code in the
/// body; everything else keeps the raw status and body.
fn classify_submit_failure(status: u16, body: String) -> NarratorError {
    if let Ok(envelope) = serde_json::from_str::<VendorErrorBody>(&body) {
        if let Some(error) = envelope.error {
            if error.code.as_deref() == Some(QUOTA_ERROR_CODE) {
                return NarratorError::QuotaExceeded {
                    message: error
                        .message
                        .unwrap_or_else(|| "daily generation cap reached".to_string()),
                };
            }
        }
    }
    NarratorError::Api { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn quota_code_is_recognized() {
        let body = r#"{"error":{"code":"trial_video_limit_exceeded","message":"Daily trial limit exceeded."}}"#;
        let err = classify_submit_failure(400, body.to_string());
        assert_matches!(
            err,
            NarratorError::QuotaExceeded { message } if message == "Daily trial limit exceeded."
        );
    }

    #[test]
    fn quota_code_without_message_gets_default() {
        let body = r#"{"error":{"code":"trial_video_limit_exceeded"}}"#;
        let err = classify_submit_failure(400, body.to_string());
        assert_matches!(err, NarratorError::QuotaExceeded { .. });
    }

    #[test]
    fn other_error_codes_stay_generic() {
        let body = r#"{"error":{"code":"invalid_avatar","message":"Unknown avatar."}}"#;
        let err = classify_submit_failure(400, body.to_string());
        assert_matches!(err, NarratorError::Api { status: 400, .. });
    }

    #[test]
    fn non_json_bodies_stay_generic() {
        let err = classify_submit_failure(502, "Bad Gateway".to_string());
        assert_matches!(err, NarratorError::Api { status: 502, .. });
    }

    #[test]
    fn submit_payload_carries_text_and_fixed_settings() {
        let body = submit_payload("Once upon a time...", &RenderSettings::default());

        let input = &body["video_inputs"][0];
        assert_eq!(input["character"]["type"], "avatar");
        assert_eq!(input["voice"]["type"], "text");
        assert_eq!(input["voice"]["input_text"], "Once upon a time...");
        assert_eq!(input["background"]["value"], "#E6E6FA");
        assert_eq!(body["dimension"]["width"], 1280);
        assert_eq!(body["dimension"]["height"], 720);
        assert_eq!(body["aspect_ratio"], "16:9");
        assert_eq!(body["test"], false);
    }
}
