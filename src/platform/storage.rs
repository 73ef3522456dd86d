//! Score storage backends
//!
//! `LocalScoreStore` keeps the best score in LocalStorage under a fixed
//! key; `MemoryStore` backs tests and the native binary.

use crate::highscore::ScoreStore;

/// LocalStorage key for the single best-score integer
#[allow(dead_code)]
const BEST_SCORE_KEY: &str = "aisle_dash_best_score";

/// In-memory store for tests and native runs
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl MemoryStore {
    pub fn with_value(value: u32) -> Self {
        Self { value: Some(value) }
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> Option<u32> {
        self.value
    }

    fn set(&mut self, value: u32) -> bool {
        self.value = Some(value);
        true
    }
}

/// Best score in the browser's LocalStorage. Missing, corrupt or blocked
/// storage reads as no score; failed writes report false and the caller
/// logs and moves on.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalScoreStore;

#[cfg(target_arch = "wasm32")]
impl LocalScoreStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalScoreStore {
    fn get(&self) -> Option<u32> {
        let raw = Self::storage()?.get_item(BEST_SCORE_KEY).ok()??;
        raw.trim().parse().ok()
    }

    fn set(&mut self, value: u32) -> bool {
        match Self::storage() {
            Some(storage) => storage.set_item(BEST_SCORE_KEY, &value.to_string()).is_ok(),
            None => false,
        }
    }
}
