//! No-op recorder for sessions that never capture

use async_trait::async_trait;

use crate::application::ports::{MicrophoneRecorder, RecordingError};

/// Recorder for upload-only sessions. File transcription goes through the
/// same controller as recording but never touches the microphone; this
/// adapter satisfies the recorder port without spawning anything.
#[derive(Debug, Default)]
pub struct NullRecorder;

impl NullRecorder {
    /// Create a no-op recorder
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MicrophoneRecorder for NullRecorder {
    async fn start(&self) -> Result<(), RecordingError> {
        Err(RecordingError::StartFailed(
            "This session has no capture device".to_string(),
        ))
    }

    async fn stop(&self) -> Result<Vec<u8>, RecordingError> {
        Err(RecordingError::RecordingFailed(
            "No recording in progress".to_string(),
        ))
    }

    async fn cancel(&self) -> Result<(), RecordingError> {
        Ok(())
    }

    fn is_recording(&self) -> bool {
        false
    }

    fn elapsed_ms(&self) -> u64 {
        0
    }
}
