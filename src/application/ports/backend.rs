//! Transcription service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioUpload;
use crate::domain::enrollment::EnrollmentForm;
use crate::domain::history::HistoryEntry;
use crate::domain::transcript::TranscriptionResult;

/// Errors from the remote transcription service.
///
/// The variants distinguish the three failure layers: no response received,
/// a response with a non-2xx status, and a 2xx response whose body could
/// not be understood.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("Request timed out")]
    Timeout,

    #[error("No response from server: {0}")]
    NoResponse(String),

    #[error("Server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Failed to parse server response: {0}")]
    MalformedResponse(String),
}

/// Port for the remote transcription service
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    /// Submit audio for transcription and summarization.
    ///
    /// # Arguments
    /// * `upload` - The audio payload and its upload filename
    ///
    /// # Returns
    /// The transcription and summary, normalized to the rich response shape
    async fn transcribe(&self, upload: &AudioUpload) -> Result<TranscriptionResult, BackendError>;

    /// Register named speakers with their voice samples.
    ///
    /// # Returns
    /// The server's confirmation message
    async fn enroll(&self, form: &EnrollmentForm) -> Result<String, BackendError>;

    /// Fetch past transcriptions, in server order.
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError>;
}
