//! History domain module

use serde::Deserialize;

/// A previously completed transcription, as returned by the service.
/// Immutable once fetched; ordering is whatever the server returned.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub filename: String,
    pub timestamp: String,
    #[serde(default)]
    pub transcription: String,
    #[serde(default)]
    pub summary_and_actions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_shape() {
        let json = r#"{
            "_id": "66f1a2",
            "filename": "standup.mp3",
            "timestamp": "2024-09-23T10:15:00Z",
            "transcription": "[0:00] hi",
            "summary_and_actions": "Short standup.\nAction Items:\n- none"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "66f1a2");
        assert_eq!(entry.filename, "standup.mp3");
        assert_eq!(entry.transcription, "[0:00] hi");
    }

    #[test]
    fn text_fields_default_to_empty() {
        let json = r#"{
            "_id": "1",
            "filename": "a.wav",
            "timestamp": "2024-09-23T10:15:00Z"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.transcription.is_empty());
        assert!(entry.summary_and_actions.is_empty());
    }
}
