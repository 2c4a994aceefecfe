//! FFmpeg-based microphone recorder adapter
//!
//! Spawns ffmpeg capturing the default input device and encoding WebM/Opus
//! to stdout. Encoder output is read in chunks and appended to a
//! [`CaptureBuffer`] in arrival order, so the assembled payload is exactly
//! the byte stream ffmpeg produced.

use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration as TokioDuration};

use crate::application::ports::{MicrophoneRecorder, RecordingError};
use crate::domain::audio::CaptureBuffer;

/// How long to wait after spawn before checking whether ffmpeg bailed out
/// (no input device, permission refused by the sound server).
const STARTUP_PROBE_DELAY: TokioDuration = TokioDuration::from_millis(200);

/// Chunk size for reading encoder output
const READ_CHUNK_SIZE: usize = 8192;

/// FFmpeg recorder for unbounded, user-stopped capture
pub struct FfmpegMicRecorder {
    /// Current ffmpeg process
    process: Arc<Mutex<Option<Child>>>,
    /// Chunks of encoder output, in arrival order
    buffer: Arc<Mutex<CaptureBuffer>>,
    /// Task draining ffmpeg's stdout into the buffer
    reader: Arc<Mutex<Option<JoinHandle<()>>>>,
    /// Recording state
    is_recording: Arc<AtomicBool>,
    /// Capture start time (for elapsed tracking)
    start_time: Arc<std::sync::Mutex<Option<Instant>>>,
}

impl FfmpegMicRecorder {
    /// Create a new ffmpeg recorder
    pub fn new() -> Self {
        Self {
            process: Arc::new(Mutex::new(None)),
            buffer: Arc::new(Mutex::new(CaptureBuffer::new())),
            reader: Arc::new(Mutex::new(None)),
            is_recording: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(std::sync::Mutex::new(None)),
        }
    }

    /// Build ffmpeg args for capturing the default mic to WebM/Opus on stdout
    fn build_ffmpeg_args() -> Vec<String> {
        [
            "-f",
            "pulse",
            "-i",
            "default",
            // Encoding settings (optimized for speech)
            "-ar",
            "16000",
            "-ac",
            "1",
            "-c:a",
            "libopus",
            "-b:a",
            "24k",
            "-application",
            "voip",
            "-f",
            "webm",
            "pipe:1",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Spawn the ffmpeg process with stdout piped
    fn spawn_ffmpeg(args: Vec<String>) -> Result<Child, RecordingError> {
        Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RecordingError::FfmpegNotFound
                } else {
                    RecordingError::StartFailed(e.to_string())
                }
            })
    }

    /// Read the last line of ffmpeg's stderr for a failure message
    async fn stderr_tail(child: &mut Child) -> String {
        let Some(mut stderr) = child.stderr.take() else {
            return "unknown error".to_string();
        };
        let mut buf = Vec::new();
        let _ = stderr.read_to_end(&mut buf).await;
        String::from_utf8_lossy(&buf)
            .lines()
            .last()
            .unwrap_or("unknown error")
            .to_string()
    }

    /// Ask ffmpeg to stop and finalize its output
    fn request_stop(child: &Child) -> Result<(), RecordingError> {
        #[cfg(unix)]
        {
            use nix::sys::signal::{self, Signal};
            use nix::unistd::Pid;

            if let Some(id) = child.id() {
                signal::kill(Pid::from_raw(id as i32), Signal::SIGINT).map_err(|e| {
                    RecordingError::RecordingFailed(format!("Signal failed: {}", e))
                })?;
            }
            Ok(())
        }
        #[cfg(not(unix))]
        {
            let _ = child;
            Ok(())
        }
    }
}

impl Default for FfmpegMicRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MicrophoneRecorder for FfmpegMicRecorder {
    async fn start(&self) -> Result<(), RecordingError> {
        let mut process_guard = self.process.lock().await;
        if process_guard.is_some() {
            return Err(RecordingError::StartFailed(
                "Recording already in progress".to_string(),
            ));
        }

        self.buffer.lock().await.clear();

        let mut child = Self::spawn_ffmpeg(Self::build_ffmpeg_args())?;

        // If ffmpeg can't open the input device it exits almost immediately;
        // surface that as the microphone being unavailable.
        sleep(STARTUP_PROBE_DELAY).await;
        if let Ok(Some(_)) = child.try_wait() {
            let detail = Self::stderr_tail(&mut child).await;
            return Err(RecordingError::AccessDenied(detail));
        }

        let mut stdout = child.stdout.take().ok_or_else(|| {
            RecordingError::StartFailed("Failed to capture ffmpeg output".to_string())
        })?;

        let buffer = Arc::clone(&self.buffer);
        let handle = tokio::spawn(async move {
            let mut chunk = [0u8; READ_CHUNK_SIZE];
            loop {
                match stdout.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buffer.lock().await.push(chunk[..n].to_vec()),
                }
            }
        });

        *process_guard = Some(child);
        *self.reader.lock().await = Some(handle);
        self.is_recording.store(true, Ordering::SeqCst);
        *self.start_time.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());

        Ok(())
    }

    async fn stop(&self) -> Result<Vec<u8>, RecordingError> {
        let mut process_guard = self.process.lock().await;
        let mut child = process_guard.take().ok_or_else(|| {
            RecordingError::RecordingFailed("No recording in progress".to_string())
        })?;

        self.is_recording.store(false, Ordering::SeqCst);

        // SIGINT lets ffmpeg flush and finalize the WebM container; the
        // reader task drains the remaining output before we assemble.
        Self::request_stop(&child)?;

        if let Some(handle) = self.reader.lock().await.take() {
            let _ = handle.await;
        }
        let _ = child.wait().await;

        let payload = self.buffer.lock().await.assemble();
        if payload.is_empty() {
            return Err(RecordingError::EmptyCapture);
        }
        Ok(payload)
    }

    async fn cancel(&self) -> Result<(), RecordingError> {
        let mut process_guard = self.process.lock().await;
        if let Some(mut child) = process_guard.take() {
            self.is_recording.store(false, Ordering::SeqCst);
            let _ = child.kill().await;
        }

        if let Some(handle) = self.reader.lock().await.take() {
            let _ = handle.await;
        }
        self.buffer.lock().await.clear();

        Ok(())
    }

    fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    fn elapsed_ms(&self) -> u64 {
        if !self.is_recording() {
            return 0;
        }
        self.start_time
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .map(|start| start.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffmpeg_args_capture_default_mic_to_webm_stdout() {
        let args = FfmpegMicRecorder::build_ffmpeg_args();
        assert_eq!(args[0], "-f");
        assert_eq!(args[1], "pulse");
        assert!(args.contains(&"libopus".to_string()));
        assert!(args.contains(&"webm".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("pipe:1"));
    }

    #[tokio::test]
    async fn stop_without_start_fails() {
        let recorder = FfmpegMicRecorder::new();
        let err = recorder.stop().await.unwrap_err();
        assert!(matches!(err, RecordingError::RecordingFailed(_)));
    }

    #[tokio::test]
    async fn cancel_without_start_is_a_no_op() {
        let recorder = FfmpegMicRecorder::new();
        assert!(recorder.cancel().await.is_ok());
        assert!(!recorder.is_recording());
    }

    #[test]
    fn elapsed_is_zero_when_not_recording() {
        let recorder = FfmpegMicRecorder::new();
        assert_eq!(recorder.elapsed_ms(), 0);
    }
}
