//! Transcript line parsing

/// Delimiter between the `[time]` prefix and the utterance text.
/// Lines look like `[0:42] we should ship on Friday`; the split is on the
/// first `"] "` so the text itself may contain brackets.
const TIMESTAMP_DELIMITER: &str = "] ";

/// One line of a transcript, optionally prefixed with a timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    timestamp: Option<String>,
    text: String,
}

impl TranscriptLine {
    /// Parse one `[time] text` line. A line without the delimiter (or whose
    /// prefix is not bracketed) is kept whole with no timestamp.
    pub fn parse(line: &str) -> Self {
        match line.split_once(TIMESTAMP_DELIMITER) {
            Some((prefix, text)) if prefix.starts_with('[') => Self {
                timestamp: Some(format!("{}]", prefix)),
                text: text.to_string(),
            },
            _ => Self {
                timestamp: None,
                text: line.to_string(),
            },
        }
    }

    /// The bracketed timestamp, e.g. `[0:42]`, if the line had one
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// The utterance text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse a whole transcript into lines, skipping blank ones
pub fn parse_transcript(transcript: &str) -> Vec<TranscriptLine> {
    transcript
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(TranscriptLine::parse)
        .collect()
}
