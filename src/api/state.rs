//! Application state
//!
//! Shared state for all handlers. The series store is loaded once at startup
//! and never mutated, so a plain `Arc` is enough.

use std::sync::Arc;
use std::time::Instant;

use crate::dataset::SeriesStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The three series slots, as loaded at startup
    pub store: Arc<SeriesStore>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<SeriesStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// Server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_starts_near_zero() {
        let state = AppState::new(Arc::new(SeriesStore::new()));
        assert!(state.uptime_seconds() < 2);
    }
}
