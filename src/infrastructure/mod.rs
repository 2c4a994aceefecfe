//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like ffmpeg and the remote
//! transcription service.

pub mod backend;
pub mod config;
pub mod recording;

// Re-export adapters
pub use backend::HttpBackend;
pub use config::XdgConfigStore;
pub use recording::{FfmpegMicRecorder, NullRecorder};
