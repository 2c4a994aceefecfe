//! Recording port interface

use async_trait::async_trait;
use thiserror::Error;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Microphone access denied or unavailable: {0}")]
    AccessDenied(String),

    #[error("ffmpeg not found. Install ffmpeg to record from the microphone.")]
    FfmpegNotFound,

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),

    #[error("No audio was captured")]
    EmptyCapture,
}

/// Port for unbounded microphone capture (explicit user stop).
///
/// Implementations must deliver audio to their internal buffer in the exact
/// order the capture facility produces it; `stop` returns the chunks joined
/// in that order.
#[async_trait]
pub trait MicrophoneRecorder: Send + Sync {
    /// Start capturing from the microphone.
    async fn start(&self) -> Result<(), RecordingError>;

    /// Stop capturing and return the assembled audio payload.
    async fn stop(&self) -> Result<Vec<u8>, RecordingError>;

    /// Abandon the capture, discarding any buffered audio.
    async fn cancel(&self) -> Result<(), RecordingError>;

    /// Check if currently capturing
    fn is_recording(&self) -> bool;

    /// Get elapsed capture time in milliseconds
    fn elapsed_ms(&self) -> u64;
}
