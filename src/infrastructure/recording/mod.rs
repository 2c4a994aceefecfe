//! Microphone recorder adapters

mod ffmpeg;
mod null;

pub use ffmpeg::FfmpegMicRecorder;
pub use null::NullRecorder;
