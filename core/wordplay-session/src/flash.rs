#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTone {
    Info,
    Success,
    Error,
}

/// Transient inline feedback that disappears after a number of ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub tone: FlashTone,
    ttl: u32,
}

impl Flash {
    pub fn new(text: impl Into<String>, tone: FlashTone, ttl: u32) -> Self {
        Self {
            text: text.into(),
            tone,
            ttl,
        }
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Age by one tick. Returns false once the message has expired.
    pub fn age(&mut self) -> bool {
        self.ttl = self.ttl.saturating_sub(1);
        self.ttl > 0
    }
}
