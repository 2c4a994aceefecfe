//! Audio domain module

mod capture_buffer;
mod upload;

pub use capture_buffer::CaptureBuffer;
pub use upload::{AudioUpload, RECORDED_AUDIO_FILENAME};
