use std::collections::BTreeMap;

/// Key-value storage for best scores (browser localStorage in production).
pub trait BestScoreStore {
    fn load(&self, key: &str) -> Option<i32>;
    fn save(&mut self, key: &str, score: i32);
}

/// In-memory store for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: BTreeMap<String, i32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Option<i32> {
        self.scores.get(key).copied()
    }

    fn save(&mut self, key: &str, score: i32) {
        self.scores.insert(key.to_string(), score);
    }
}

/// Read-compare-write: store `score` only if it beats the stored value.
/// Returns true when a new best was written.
pub fn record_best<S: BestScoreStore + ?Sized>(store: &mut S, key: &str, score: i32) -> bool {
    match store.load(key) {
        Some(best) if best >= score => false,
        previous => {
            store.save(key, score);
            log::info!("new best score for {}: {} (was {:?})", key, score, previous);
            true
        }
    }
}
