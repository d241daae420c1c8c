use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{NaiveDateTime, Utc};

// Needed stats:
// - total pages fetched
// - total records emitted
// - runtime for the run
pub struct Stats {
    pages_fetched: AtomicU64,
    records_emitted: AtomicU64,
    start_time: Mutex<NaiveDateTime>,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            pages_fetched: AtomicU64::new(0),
            records_emitted: AtomicU64::new(0),
            start_time: Mutex::new(Utc::now().naive_utc()),
        }
    }

    pub fn incr_pages_fetched(&self) {
        self.pages_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_records_emitted(&self, value: u64) {
        self.records_emitted.fetch_add(value, Ordering::Relaxed);
    }

    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched.load(Ordering::Relaxed)
    }

    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    /// Elapsed time for this run in seconds
    pub fn elapsed_time(&self) -> i64 {
        let start_time = self.start_time.lock().unwrap();
        let now = Utc::now().naive_utc();
        let elapsed = now - *start_time;
        elapsed.num_seconds()
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
