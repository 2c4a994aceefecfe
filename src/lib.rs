//! MeetingScribe - meeting transcription CLI with speaker identification
//!
//! This crate records meeting audio from the microphone (or takes an
//! existing audio file) and sends it to a remote transcription service,
//! which returns a speaker-attributed transcript together with a summary
//! and action items. Speakers can be enrolled by name with voice samples,
//! and past transcriptions can be listed.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (ffmpeg, HTTP backend, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
