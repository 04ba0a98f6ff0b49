use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Number of static app visits since start (or since the last dev reset).
///
/// Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct HitCounter {
    hits: Arc<AtomicU64>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn current(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
