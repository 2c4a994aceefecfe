//! Audio upload value object

/// Fixed filename used for microphone recordings. The capture pipeline
/// produces WebM/Opus, and the server keys recorded uploads off this name.
pub const RECORDED_AUDIO_FILENAME: &str = "recorded_audio.webm";

/// Value object representing an audio payload ready for upload.
/// Owns the raw bytes and the filename sent in the multipart request.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    data: Vec<u8>,
    filename: String,
}

impl AudioUpload {
    /// Wrap a finished microphone recording under the fixed upload name
    pub fn from_recording(data: Vec<u8>) -> Self {
        Self {
            data,
            filename: RECORDED_AUDIO_FILENAME.to_string(),
        }
    }

    /// Wrap a user-selected file, keeping its original filename
    pub fn from_file(data: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            data,
            filename: filename.into(),
        }
    }

    /// Get the raw audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the filename sent with the upload
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
