use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::Mutex;

/// Per-day usage counter capability.
///
/// The only state the service persists: a non-negative count per calendar
/// date. Implementations must make `increment` atomic so concurrent
/// successful computations for the same day are never lost.
pub trait UsageStats: Send + Sync {
    /// Bumps the counter for `date` by one and returns the new count.
    fn increment(&self, date: NaiveDate) -> u64;

    /// Current count for `date`, zero if the date was never incremented.
    fn count(&self, date: NaiveDate) -> u64;
}

/// Mutex-guarded map counter. Good enough for a process-local service and
/// for tests; a database-backed store would implement the same trait.
#[derive(Default)]
pub struct InMemoryUsageStats {
    counts: Mutex<HashMap<NaiveDate, u64>>,
}

impl InMemoryUsageStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageStats for InMemoryUsageStats {
    fn increment(&self, date: NaiveDate) -> u64 {
        let mut counts = self.counts.lock();
        let count = counts.entry(date).or_insert(0);
        *count += 1;
        *count
    }

    fn count(&self, date: NaiveDate) -> u64 {
        self.counts.lock().get(&date).copied().unwrap_or(0)
    }
}
