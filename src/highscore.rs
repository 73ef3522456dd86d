//! Single best-score value behind a storage trait
//!
//! The store is best-effort local I/O: reads that fail or parse garbage
//! become "no high score", writes that fail are logged and dropped. Nothing
//! here may panic or block the tick loop.

/// One non-negative integer of durable storage
pub trait ScoreStore {
    /// `None` on missing, corrupt or unavailable storage. Must not panic.
    fn get(&self) -> Option<u32>;
    /// Returns whether the write landed. Must not panic.
    fn set(&mut self, value: u32) -> bool;
}

/// Cached best score with write-through persistence. The cache means a
/// failed write still keeps the session's best in memory, and `submit` only
/// ever writes strictly increasing values.
pub struct BestScore<S> {
    store: S,
    best: u32,
}

impl<S: ScoreStore> BestScore<S> {
    pub fn load(store: S) -> Self {
        let best = store.get().unwrap_or(0);
        Self { store, best }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Record a new score. Persists and returns true only when it beats
    /// the current best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if !self.store.set(score) {
            log::warn!("best score {} not persisted, keeping in memory", score);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;
    use proptest::prelude::*;

    /// Store that records every write, for asserting write discipline
    #[derive(Default)]
    struct RecordingStore {
        writes: Vec<u32>,
    }

    impl ScoreStore for RecordingStore {
        fn get(&self) -> Option<u32> {
            self.writes.last().copied()
        }

        fn set(&mut self, value: u32) -> bool {
            self.writes.push(value);
            true
        }
    }

    /// Store that always fails its writes
    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self) -> Option<u32> {
            None
        }

        fn set(&mut self, _value: u32) -> bool {
            false
        }
    }

    #[test]
    fn test_missing_store_reads_zero() {
        let best = BestScore::load(MemoryStore::default());
        assert_eq!(best.get(), 0);
    }

    #[test]
    fn test_submit_only_improvements() {
        let mut best = BestScore::load(MemoryStore::with_value(10));
        assert!(!best.submit(5));
        assert!(!best.submit(10));
        assert!(best.submit(11));
        assert_eq!(best.get(), 11);
    }

    #[test]
    fn test_failed_write_keeps_session_best() {
        let mut best = BestScore::load(BrokenStore);
        assert!(best.submit(42));
        assert_eq!(best.get(), 42);
        assert!(!best.submit(41));
    }

    proptest! {
        /// Writes are strictly increasing and the final best is the
        /// maximum ever submitted.
        #[test]
        fn prop_write_discipline(scores in proptest::collection::vec(0u32..10_000, 0..64)) {
            let mut best = BestScore::load(RecordingStore::default());
            for &s in &scores {
                best.submit(s);
            }

            let writes = &best.store.writes;
            for pair in writes.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
            let expected = scores.iter().copied().max().filter(|&m| m > 0).unwrap_or(0);
            prop_assert_eq!(best.get(), expected);
            prop_assert_eq!(best.store.get().unwrap_or(0), expected);
        }
    }
}
