//! Recording/upload session controller use case

use thiserror::Error;

use crate::domain::audio::AudioUpload;
use crate::domain::session::{InvalidStateTransition, Session};
use crate::domain::transcript::TranscriptionResult;

use super::ports::{MicrophoneRecorder, RecordingError, TranscriptionBackend};

/// Errors from the session controller.
///
/// Transcription failures are not surfaced here: they end the session in
/// the FAILED state with its fixed user-facing message, and the caller
/// reads them off the session. These errors cover what happens before a
/// request is dispatched.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Error accessing microphone")]
    MicrophoneAccessDenied,

    #[error(transparent)]
    InvalidTransition(#[from] InvalidStateTransition),

    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),
}

/// Mediates between the microphone, file selection, and the remote
/// transcription endpoint, exposing the session state machine.
///
/// Starting a new action while a capture is active is rejected with an
/// invalid-transition error; starting one while a request is in flight
/// supersedes that request, and the generation token keeps its late
/// response from overwriting the newer session's state.
pub struct SessionController<R, B>
where
    R: MicrophoneRecorder,
    B: TranscriptionBackend,
{
    recorder: R,
    backend: B,
    session: Session,
}

impl<R, B> SessionController<R, B>
where
    R: MicrophoneRecorder,
    B: TranscriptionBackend,
{
    /// Create a controller with an idle session
    pub fn new(recorder: R, backend: B) -> Self {
        Self {
            recorder,
            backend,
            session: Session::new(),
        }
    }

    /// The current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Elapsed capture time in milliseconds, for progress display
    pub fn elapsed_ms(&self) -> u64 {
        self.recorder.elapsed_ms()
    }

    /// Begin a microphone capture. Any recorder start failure is treated as
    /// the microphone being denied or unavailable; the session returns to
    /// idle and the failure is never retried automatically.
    pub async fn start_recording(&mut self) -> Result<(), SessionError> {
        self.session.begin_capture()?;

        if self.recorder.start().await.is_err() {
            self.session.abort_capture()?;
            return Err(SessionError::MicrophoneAccessDenied);
        }
        Ok(())
    }

    /// Stop the capture, upload the assembled audio under the fixed
    /// recording filename, and resolve the session to SUCCEEDED or FAILED.
    pub async fn stop_and_transcribe(&mut self) -> Result<(), SessionError> {
        let payload = match self.recorder.stop().await {
            Ok(payload) => payload,
            Err(e) => {
                self.session.abort_capture()?;
                return Err(SessionError::Recording(e));
            }
        };

        let upload = AudioUpload::from_recording(payload);
        self.session.begin_upload_from_capture(upload.clone())?;
        self.dispatch(upload).await;
        Ok(())
    }

    /// Abandon an active capture without uploading anything
    pub async fn cancel_recording(&mut self) -> Result<(), SessionError> {
        self.recorder.cancel().await?;
        self.session.abort_capture()?;
        Ok(())
    }

    /// Upload a selected file's content as-is under its original filename
    /// and resolve the session to SUCCEEDED or FAILED.
    pub async fn transcribe_file(
        &mut self,
        data: Vec<u8>,
        filename: &str,
    ) -> Result<(), SessionError> {
        let upload = AudioUpload::from_file(data, filename);
        self.session.begin_upload(upload.clone())?;
        self.dispatch(upload).await;
        Ok(())
    }

    /// Issue the transcription request and apply its outcome to the session,
    /// unless a newer attempt has superseded it in the meantime.
    async fn dispatch(&mut self, upload: AudioUpload) {
        let token = self.session.generation();

        match self.backend.transcribe(&upload).await {
            Ok(result) => {
                self.apply_success(token, result);
            }
            Err(_) => {
                let message = self
                    .session
                    .source()
                    .map(|source| source.upload_error_message())
                    .unwrap_or("Error transcribing audio");
                self.apply_failure(token, message);
            }
        }
    }

    fn apply_success(&mut self, token: u64, result: TranscriptionResult) -> bool {
        self.session.complete_if_current(token, result)
    }

    fn apply_failure(&mut self, token: u64, message: &str) -> bool {
        self.session.fail_if_current(token, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::EnrollmentForm;
    use crate::domain::history::HistoryEntry;
    use crate::domain::session::SessionStatus;
    use crate::application::ports::BackendError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    // Mock implementations for testing

    struct MockRecorder {
        chunks: Vec<Vec<u8>>,
        deny_access: bool,
        recording: AtomicBool,
    }

    impl MockRecorder {
        fn with_chunks(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                chunks,
                deny_access: false,
                recording: AtomicBool::new(false),
            }
        }

        fn denied() -> Self {
            Self {
                chunks: Vec::new(),
                deny_access: true,
                recording: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl MicrophoneRecorder for MockRecorder {
        async fn start(&self) -> Result<(), RecordingError> {
            if self.deny_access {
                return Err(RecordingError::AccessDenied("denied".to_string()));
            }
            self.recording.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn stop(&self) -> Result<Vec<u8>, RecordingError> {
            self.recording.store(false, Ordering::SeqCst);
            let mut buffer = crate::domain::audio::CaptureBuffer::new();
            for chunk in &self.chunks {
                buffer.push(chunk.clone());
            }
            Ok(buffer.assemble())
        }

        async fn cancel(&self) -> Result<(), RecordingError> {
            self.recording.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn is_recording(&self) -> bool {
            self.recording.load(Ordering::SeqCst)
        }

        fn elapsed_ms(&self) -> u64 {
            0
        }
    }

    struct MockBackend {
        response: Result<TranscriptionResult, BackendError>,
        last_upload: Mutex<Option<(Vec<u8>, String)>>,
    }

    impl MockBackend {
        fn succeeding() -> Self {
            Self {
                response: Ok(TranscriptionResult::new(
                    "hello",
                    "Action Items:\n- call Bob",
                )),
                last_upload: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(BackendError::NoResponse("connection refused".to_string())),
                last_upload: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TranscriptionBackend for MockBackend {
        async fn transcribe(
            &self,
            upload: &AudioUpload,
        ) -> Result<TranscriptionResult, BackendError> {
            let mut last = self.last_upload.lock().unwrap();
            *last = Some((upload.data().to_vec(), upload.filename().to_string()));
            self.response.clone()
        }

        async fn enroll(&self, _form: &EnrollmentForm) -> Result<String, BackendError> {
            Ok("enrolled".to_string())
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, BackendError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn recording_cycle_uploads_chunks_in_order_under_fixed_name() {
        let recorder = MockRecorder::with_chunks(vec![vec![1, 2], vec![3], vec![4, 5]]);
        let backend = MockBackend::succeeding();
        let mut controller = SessionController::new(recorder, backend);

        controller.start_recording().await.unwrap();
        assert_eq!(controller.session().status(), SessionStatus::Capturing);

        controller.stop_and_transcribe().await.unwrap();
        assert_eq!(controller.session().status(), SessionStatus::Succeeded);

        let last = controller.backend.last_upload.lock().unwrap();
        let (data, filename) = last.as_ref().unwrap();
        assert_eq!(data, &vec![1, 2, 3, 4, 5]);
        assert_eq!(filename, "recorded_audio.webm");
    }

    #[tokio::test]
    async fn success_stores_result_verbatim() {
        let mut controller =
            SessionController::new(MockRecorder::with_chunks(vec![]), MockBackend::succeeding());

        controller
            .transcribe_file(vec![9], "meeting.mp3")
            .await
            .unwrap();

        let session = controller.session();
        assert_eq!(session.status(), SessionStatus::Succeeded);
        let result = session.result().unwrap();
        assert_eq!(result.transcription(), "hello");
        assert_eq!(result.summary_and_actions(), "Action Items:\n- call Bob");
        assert!(session.error_message().is_none());
    }

    #[tokio::test]
    async fn file_upload_failure_uses_uploaded_file_message() {
        let mut controller =
            SessionController::new(MockRecorder::with_chunks(vec![]), MockBackend::failing());

        controller
            .transcribe_file(vec![9], "meeting.mp3")
            .await
            .unwrap();

        let session = controller.session();
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(
            session.error_message(),
            Some("Error transcribing uploaded audio")
        );
    }

    #[tokio::test]
    async fn recording_failure_uses_recorded_audio_message() {
        let recorder = MockRecorder::with_chunks(vec![vec![1]]);
        let mut controller = SessionController::new(recorder, MockBackend::failing());

        controller.start_recording().await.unwrap();
        controller.stop_and_transcribe().await.unwrap();

        assert_eq!(
            controller.session().error_message(),
            Some("Error transcribing recorded audio")
        );
    }

    #[tokio::test]
    async fn microphone_denial_returns_to_idle() {
        let mut controller =
            SessionController::new(MockRecorder::denied(), MockBackend::succeeding());

        let err = controller.start_recording().await.unwrap_err();
        assert!(matches!(err, SessionError::MicrophoneAccessDenied));
        assert_eq!(err.to_string(), "Error accessing microphone");
        assert_eq!(controller.session().status(), SessionStatus::Idle);
        assert!(controller.session().error_message().is_none());
    }

    #[tokio::test]
    async fn start_while_capturing_is_rejected() {
        let recorder = MockRecorder::with_chunks(vec![]);
        let mut controller = SessionController::new(recorder, MockBackend::succeeding());

        controller.start_recording().await.unwrap();
        let err = controller.start_recording().await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn new_attempt_after_failure_resets_outcome() {
        let mut controller =
            SessionController::new(MockRecorder::with_chunks(vec![]), MockBackend::failing());

        controller.transcribe_file(vec![1], "a.mp3").await.unwrap();
        assert_eq!(controller.session().status(), SessionStatus::Failed);

        // Retry is a user-initiated repeat of the same action.
        controller.transcribe_file(vec![2], "b.mp3").await.unwrap();
        let session = controller.session();
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(session.display_name(), Some("b.mp3"));
    }

    #[tokio::test]
    async fn cancel_recording_returns_to_idle() {
        let recorder = MockRecorder::with_chunks(vec![vec![1]]);
        let mut controller = SessionController::new(recorder, MockBackend::succeeding());

        controller.start_recording().await.unwrap();
        controller.cancel_recording().await.unwrap();
        assert_eq!(controller.session().status(), SessionStatus::Idle);
    }

    #[tokio::test]
    async fn stale_outcome_is_dropped() {
        let mut controller =
            SessionController::new(MockRecorder::with_chunks(vec![]), MockBackend::succeeding());

        controller.transcribe_file(vec![1], "a.mp3").await.unwrap();
        let stale_token = controller.session.generation();

        controller.transcribe_file(vec![2], "b.mp3").await.unwrap();

        assert!(!controller.apply_failure(stale_token, "stale"));
        assert_eq!(controller.session().status(), SessionStatus::Succeeded);
        assert_eq!(controller.session().display_name(), Some("b.mp3"));
    }
}
