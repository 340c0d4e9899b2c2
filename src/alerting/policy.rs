//! Alert throttling rules.
//!
//! # Rules
//! - Failure alerts are edge-triggered: exactly when the streak equals the threshold
//! - Latency alerts fire at or above the threshold, at most once per cooldown per URL

use std::collections::HashMap;

/// Minimum spacing between two latency alerts for one URL.
pub const LATENCY_ALERT_COOLDOWN_SECONDS: u64 = 3600;

/// Per-URL cooldown gate.
#[derive(Debug)]
pub struct LatencyAlertLimiter {
    cooldown_seconds: i64,
    last_alert_by_url: HashMap<String, i64>,
}

impl LatencyAlertLimiter {
    pub fn new(cooldown_seconds: u64) -> Self {
        Self {
            cooldown_seconds: cooldown_seconds.clamp(1, i64::MAX as u64) as i64,
            last_alert_by_url: HashMap::new(),
        }
    }

    /// First call per URL always passes; later calls pass once the cooldown
    /// has elapsed. Passing stamps `now`.
    pub fn should_alert(&mut self, url: &str, now_epoch_seconds: i64) -> bool {
        match self.last_alert_by_url.get(url) {
            Some(&last) if now_epoch_seconds.saturating_sub(last) < self.cooldown_seconds => false,
            _ => {
                self.last_alert_by_url
                    .insert(url.to_string(), now_epoch_seconds);
                true
            }
        }
    }
}

impl Default for LatencyAlertLimiter {
    fn default() -> Self {
        Self::new(LATENCY_ALERT_COOLDOWN_SECONDS)
    }
}

/// Decides which probe results deserve an alert.
#[derive(Debug)]
pub struct AlertPolicy {
    failure_threshold: u32,
    latency_threshold_ms: u64,
    latency_limiter: LatencyAlertLimiter,
}

impl AlertPolicy {
    pub fn new(
        failure_threshold: u32,
        latency_threshold_ms: u64,
        latency_limiter: LatencyAlertLimiter,
    ) -> Self {
        Self {
            failure_threshold: failure_threshold.max(1),
            latency_threshold_ms,
            latency_limiter,
        }
    }

    pub fn failure_threshold(&self) -> u32 {
        self.failure_threshold
    }

    pub fn latency_threshold_ms(&self) -> u64 {
        self.latency_threshold_ms
    }

    pub fn should_alert_failure(&self, streak: u32) -> bool {
        streak == self.failure_threshold
    }

    pub fn should_alert_latency(&mut self, url: &str, latency_ms: u64, now_epoch_seconds: i64) -> bool {
        if latency_ms < self.latency_threshold_ms {
            return false;
        }
        self.latency_limiter.should_alert(url, now_epoch_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_limiter_cooldown() {
        let mut limiter = LatencyAlertLimiter::new(3600);
        assert!(limiter.should_alert("url", 0));
        assert!(!limiter.should_alert("url", 3599));
        assert!(limiter.should_alert("url", 3600));
        assert!(!limiter.should_alert("url", 7199));
        assert!(limiter.should_alert("url", 7200));
    }

    #[test]
    fn test_latency_limiter_is_per_url() {
        let mut limiter = LatencyAlertLimiter::default();
        assert!(limiter.should_alert("a", 100));
        assert!(limiter.should_alert("b", 101));
        assert!(!limiter.should_alert("a", 102));
    }

    #[test]
    fn test_failure_alert_is_edge_triggered() {
        let policy = AlertPolicy::new(3, 4000, LatencyAlertLimiter::default());
        let fired: Vec<u32> = (0..=10).filter(|s| policy.should_alert_failure(*s)).collect();
        assert_eq!(fired, vec![3]);
    }

    #[test]
    fn test_zero_threshold_is_raised_to_one() {
        let policy = AlertPolicy::new(0, 0, LatencyAlertLimiter::default());
        assert_eq!(policy.failure_threshold(), 1);
        assert!(!policy.should_alert_failure(0));
        assert!(policy.should_alert_failure(1));
    }

    #[test]
    fn test_latency_below_threshold_does_not_touch_cooldown() {
        let mut policy = AlertPolicy::new(3, 4000, LatencyAlertLimiter::default());

        assert!(!policy.should_alert_latency("url", 3999, 0));
        assert!(policy.should_alert_latency("url", 4000, 10));
        assert!(!policy.should_alert_latency("url", 9000, 20));
        assert!(policy.should_alert_latency("url", 9000, 3610));
    }
}
