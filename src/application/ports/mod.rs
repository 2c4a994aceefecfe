//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod backend;
pub mod config;
pub mod recorder;

// Re-export common types
pub use backend::{BackendError, TranscriptionBackend};
pub use config::ConfigStore;
pub use recorder::{MicrophoneRecorder, RecordingError};
