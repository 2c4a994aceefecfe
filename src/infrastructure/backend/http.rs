//! HTTP transcription backend adapter

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::ports::{BackendError, TranscriptionBackend};
use crate::domain::audio::AudioUpload;
use crate::domain::enrollment::EnrollmentForm;
use crate::domain::history::HistoryEntry;
use crate::domain::transcript::TranscriptionResult;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

// Response types for the transcription service

/// Success body of `POST /transcribe`. The current service nests the
/// summary under `summary_and_actions`; an earlier deployment returned the
/// transcription alone, so that field is optional and normalized to empty.
#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    transcription: String,
    #[serde(default)]
    summary_and_actions: Option<String>,
}

impl From<TranscribeResponse> for TranscriptionResult {
    fn from(raw: TranscribeResponse) -> Self {
        TranscriptionResult::new(raw.transcription, raw.summary_and_actions.unwrap_or_default())
    }
}

/// Success body of `POST /enroll`
#[derive(Debug, Deserialize)]
struct EnrollResponse {
    message: String,
}

/// HTTP client for the remote transcription service
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpBackend {
    /// Create a backend for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a backend with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    /// Build the full URL for an endpoint path
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a transport-level failure: either nothing came back in time, or
    /// nothing came back at all.
    fn map_send_error(err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::NoResponse(err.to_string())
        }
    }

    /// Convert a non-2xx response into a server error with a short message
    async fn server_error(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = body.lines().next().unwrap_or("").chars().take(200).collect();
        BackendError::ServerError { status, message }
    }
}

#[async_trait]
impl TranscriptionBackend for HttpBackend {
    async fn transcribe(&self, upload: &AudioUpload) -> Result<TranscriptionResult, BackendError> {
        let part = Part::bytes(upload.data().to_vec()).file_name(upload.filename().to_string());
        let form = Form::new().part("audio", part);

        let response = self
            .client
            .post(self.endpoint("/transcribe"))
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let raw: TranscribeResponse = response
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        Ok(raw.into())
    }

    async fn enroll(&self, enrollment: &EnrollmentForm) -> Result<String, BackendError> {
        let mut form = Form::new().text("num_speakers", enrollment.num_speakers().to_string());

        // Slot order is the wire order: the i-th `names` field pairs with
        // the `audio_<i>` part.
        for (index, slot) in enrollment.slots().iter().enumerate() {
            form = form.text("names", slot.name().to_string());
            if let Some(sample) = slot.sample() {
                let part = Part::bytes(sample.to_vec())
                    .file_name(EnrollmentForm::sample_filename(index));
                form = form.part(format!("audio_{}", index), part);
            }
        }

        let response = self
            .client
            .post(self.endpoint("/enroll"))
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let raw: EnrollResponse = response
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        Ok(raw.message)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError> {
        let response = self
            .client
            .get(self.endpoint("/get_transcriptions"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }
}
