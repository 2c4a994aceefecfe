//! Recording/upload session state machine

use std::fmt;
use thiserror::Error;

use crate::domain::audio::AudioUpload;
use crate::domain::transcript::TranscriptionResult;

/// Where the session's audio came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioSource {
    Recording,
    UploadedFile,
}

impl AudioSource {
    /// Fixed user-facing message shown when the transcription request for
    /// this source fails. The two paths must stay distinguishable so the
    /// user knows which action to retry.
    pub const fn upload_error_message(&self) -> &'static str {
        match self {
            Self::Recording => "Error transcribing recorded audio",
            Self::UploadedFile => "Error transcribing uploaded audio",
        }
    }
}

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Capturing,
    Uploading,
    Succeeded,
    Failed,
}

impl SessionStatus {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Capturing => "capturing",
            Self::Uploading => "uploading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Whether a new attempt may begin from this state. Uploading is
    /// included: a new action supersedes the in-flight request, whose
    /// late response is then dropped by the generation check. Only an
    /// active capture must be stopped or cancelled first.
    pub const fn can_start_new(&self) -> bool {
        !matches!(self, Self::Capturing)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: SessionStatus,
    pub action: String,
}

/// One attempt at producing a transcription, from capture or file selection
/// through the remote request.
///
/// State machine:
///   IDLE/SUCCEEDED/FAILED/UPLOADING -> CAPTURING (begin_capture)
///   CAPTURING -> IDLE (abort_capture, e.g. microphone denied)
///   CAPTURING -> UPLOADING (begin_upload_from_capture)
///   IDLE/SUCCEEDED/FAILED/UPLOADING -> UPLOADING (begin_upload, file selection)
///   UPLOADING -> SUCCEEDED (complete_if_current)
///   UPLOADING -> FAILED (fail_if_current)
///
/// Beginning a new attempt while UPLOADING supersedes the in-flight
/// request; its eventual response carries a stale generation token and is
/// dropped. Only CAPTURING blocks new attempts, since the microphone must
/// be stopped or cancelled explicitly.
///
/// Invariants: `result` is present iff status is SUCCEEDED, `error_message`
/// is present iff status is FAILED. Beginning a new session bumps the
/// generation counter and discards the previous payload and outcome, so a
/// response from a superseded request can never overwrite newer state.
#[derive(Debug, Default)]
pub struct Session {
    status: SessionStatus,
    source: Option<AudioSource>,
    display_name: Option<String>,
    audio: Option<AudioUpload>,
    result: Option<TranscriptionResult>,
    error_message: Option<String>,
    generation: u64,
}

impl Session {
    /// Create a new session container in idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Get the audio source of the current attempt, if one has started
    pub fn source(&self) -> Option<AudioSource> {
        self.source
    }

    /// Label for the session's audio (fixed name for recordings, original
    /// filename for uploads)
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The captured or selected audio payload, if any
    pub fn audio(&self) -> Option<&AudioUpload> {
        self.audio.as_ref()
    }

    /// The transcription result, present only when status is SUCCEEDED
    pub fn result(&self) -> Option<&TranscriptionResult> {
        self.result.as_ref()
    }

    /// The failure message, present only when status is FAILED
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Token identifying the current attempt. Captured before dispatching a
    /// request and checked again when the response arrives.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discard the previous attempt's payload and outcome and bump the
    /// generation so any still-in-flight response becomes stale.
    fn begin_new(&mut self, source: AudioSource, display_name: String) {
        self.source = Some(source);
        self.display_name = Some(display_name);
        self.audio = None;
        self.result = None;
        self.error_message = None;
        self.generation += 1;
    }

    /// Start a microphone capture. Allowed from any state except an active
    /// capture; an in-flight upload is superseded.
    pub fn begin_capture(&mut self) -> Result<(), InvalidStateTransition> {
        if !self.status.can_start_new() {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: "start recording".to_string(),
            });
        }
        self.begin_new(
            AudioSource::Recording,
            crate::domain::audio::RECORDED_AUDIO_FILENAME.to_string(),
        );
        self.status = SessionStatus::Capturing;
        Ok(())
    }

    /// Abandon an active capture (microphone denied or stop failed) and
    /// return to idle. The failure itself is surfaced by the caller, not
    /// stored on the session.
    pub fn abort_capture(&mut self) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Capturing {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: "abort capture".to_string(),
            });
        }
        self.status = SessionStatus::Idle;
        self.source = None;
        self.display_name = None;
        Ok(())
    }

    /// Finish capture and move to uploading with the assembled payload
    pub fn begin_upload_from_capture(
        &mut self,
        audio: AudioUpload,
    ) -> Result<(), InvalidStateTransition> {
        if self.status != SessionStatus::Capturing {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: "stop recording".to_string(),
            });
        }
        self.audio = Some(audio);
        self.status = SessionStatus::Uploading;
        Ok(())
    }

    /// Start a file-selection upload, skipping the capture phase. Allowed
    /// from any state except an active capture; an in-flight upload is
    /// superseded.
    pub fn begin_upload(&mut self, audio: AudioUpload) -> Result<(), InvalidStateTransition> {
        if !self.status.can_start_new() {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: "upload file".to_string(),
            });
        }
        self.begin_new(AudioSource::UploadedFile, audio.filename().to_string());
        self.audio = Some(audio);
        self.status = SessionStatus::Uploading;
        Ok(())
    }

    /// Store a successful result, but only if `token` still identifies the
    /// current attempt. A stale response is dropped and `false` returned.
    pub fn complete_if_current(&mut self, token: u64, result: TranscriptionResult) -> bool {
        if token != self.generation || self.status != SessionStatus::Uploading {
            return false;
        }
        self.result = Some(result);
        self.error_message = None;
        self.status = SessionStatus::Succeeded;
        true
    }

    /// Store a failure message, but only if `token` still identifies the
    /// current attempt. A stale failure is dropped and `false` returned.
    pub fn fail_if_current(&mut self, token: u64, message: impl Into<String>) -> bool {
        if token != self.generation || self.status != SessionStatus::Uploading {
            return false;
        }
        self.error_message = Some(message.into());
        self.result = None;
        self.status = SessionStatus::Failed;
        true
    }
}
