use log::warn;
use web_sys::Storage;
use wordplay_session::BestScoreStore;

/// Best scores in `window.localStorage`. Missing or blocked storage
/// degrades to a store that remembers nothing.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable; best scores will not persist");
        }
        Self { storage }
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<i32> {
        let raw = self.storage.as_ref()?.get_item(key).ok().flatten()?;
        raw.trim().parse().ok()
    }

    fn save(&mut self, key: &str, score: i32) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, &score.to_string()).is_err() {
                warn!("could not write {} to localStorage", key);
            }
        }
    }
}
