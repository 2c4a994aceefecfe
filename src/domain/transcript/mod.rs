//! Transcript domain module

mod result;
mod summary;
mod timeline;

pub use result::TranscriptionResult;
pub use summary::{SummaryAndActions, ACTION_ITEMS_MARKER};
pub use timeline::{parse_transcript, TranscriptLine};
