//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod history;
pub mod session;
pub mod transcript;

// Re-export common types
pub use audio::{AudioUpload, CaptureBuffer, RECORDED_AUDIO_FILENAME};
pub use config::AppConfig;
pub use enrollment::{EnrollmentForm, EnrollmentFormError, SpeakerSlot};
pub use error::*;
pub use history::HistoryEntry;
pub use session::{AudioSource, InvalidStateTransition, Session, SessionStatus};
pub use transcript::{SummaryAndActions, TranscriptLine, TranscriptionResult};
