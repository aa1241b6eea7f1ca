//! Drops responses that arrive after a newer request was started

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request and returns its ticket
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` belongs to the most recent request
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = RequestGuard::new();
        let other = guard.clone();
        let ticket = guard.begin();
        assert!(other.is_current(ticket));
        other.begin();
        assert!(!guard.is_current(ticket));
    }
}
