//! Transcription result value object

/// Structured payload returned by a successful transcription request.
/// Both fields are stored verbatim as the server produced them; parsing
/// into summary/action items and timeline lines happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    transcription: String,
    summary_and_actions: String,
}

impl TranscriptionResult {
    /// Create a result from the server's two text fields
    pub fn new(transcription: impl Into<String>, summary_and_actions: impl Into<String>) -> Self {
        Self {
            transcription: transcription.into(),
            summary_and_actions: summary_and_actions.into(),
        }
    }

    /// The raw transcript text, one "[time] text" line per utterance
    pub fn transcription(&self) -> &str {
        &self.transcription
    }

    /// The raw summary text, optionally containing an "Action Items:" section
    pub fn summary_and_actions(&self) -> &str {
        &self.summary_and_actions
    }
}
