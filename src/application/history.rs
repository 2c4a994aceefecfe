//! History fetching use case

use thiserror::Error;

use crate::domain::history::HistoryEntry;

use super::ports::{BackendError, TranscriptionBackend};

/// User-facing history fetch failures. An empty history is not an error;
/// it is a valid result distinct from any of these.
#[derive(Debug, Clone, Error)]
pub enum HistoryError {
    #[error("History request timed out")]
    Timeout,

    #[error("Could not reach the transcription service")]
    NoResponse,

    #[error("Server error while fetching history (HTTP {0})")]
    ServerError(u16),

    #[error("Failed to fetch history: {0}")]
    Unknown(String),
}

impl From<BackendError> for HistoryError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Timeout => Self::Timeout,
            BackendError::NoResponse(_) => Self::NoResponse,
            BackendError::ServerError { status, .. } => Self::ServerError(status),
            BackendError::MalformedResponse(message) => Self::Unknown(message),
        }
    }
}

/// Fetches the read-only list of past transcriptions
pub struct FetchHistoryUseCase<B: TranscriptionBackend> {
    backend: B,
}

impl<B: TranscriptionBackend> FetchHistoryUseCase<B> {
    /// Create a new use case instance
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch all entries, preserving server order.
    pub async fn execute(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.backend.fetch_history().await?)
    }
}
