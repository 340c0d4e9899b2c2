//! Per-URL consecutive failure counter.

use std::collections::HashMap;

/// Consecutive hard failures per URL.
///
/// Owned by a single coordinator; not shared across tasks.
#[derive(Debug, Default)]
pub struct FailureStreakTracker {
    counts: HashMap<String, u32>,
}

impl FailureStreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome and return the streak after it.
    pub fn record(&mut self, url: &str, is_failure: bool) -> u32 {
        let count = self.counts.entry(url.to_string()).or_insert(0);
        if is_failure {
            *count = count.saturating_add(1);
        } else {
            *count = 0;
        }
        *count
    }

    /// Current streak, 0 for unseen URLs.
    pub fn current(&self, url: &str) -> u32 {
        self.counts.get(url).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_resets() {
        let mut tracker = FailureStreakTracker::new();
        let outputs: Vec<u32> = [true, true, false, true]
            .into_iter()
            .map(|failed| tracker.record("url", failed))
            .collect();
        assert_eq!(outputs, vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_urls_are_independent() {
        let mut tracker = FailureStreakTracker::new();
        tracker.record("a", true);
        tracker.record("a", true);
        assert_eq!(tracker.record("b", true), 1);
        assert_eq!(tracker.current("a"), 2);
        assert_eq!(tracker.current("never-seen"), 0);
    }
}
