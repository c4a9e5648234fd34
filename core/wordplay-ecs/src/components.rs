use wordplay_protocol::{SpanId, SpanStatus};

/// One passage token (source of truth for display text).
#[derive(Debug, Clone)]
pub struct TokenData {
    pub index: usize,
    pub text: String,
}

/// Immutable description of a mistake span.
#[derive(Debug, Clone)]
pub struct SpanData {
    pub id: SpanId,
    pub start: usize,
    pub len: usize,
    /// Covered tokens as they appear in the passage.
    pub wrong: String,
    pub correct: String,
}

impl SpanData {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Mutable progress of a mistake span.
#[derive(Debug, Clone, Default)]
pub struct SpanState {
    pub status: SpanStatus,
    pub last_attempt: Option<String>,
}
