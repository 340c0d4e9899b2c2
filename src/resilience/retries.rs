//! Retry policy for probes.
//!
//! # Design Decisions
//! - Transport errors and 5xx are retryable
//! - 4xx and successes stop immediately
//! - Constant backoff, no jitter

use std::time::Duration;

use crate::probe::ProbeResult;

/// Bounded retry with a constant pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// `retries` extra attempts after the first, `backoff_seconds` between them.
    pub fn new(retries: u32, backoff_seconds: u64) -> Self {
        Self {
            max_attempts: retries.saturating_add(1),
            backoff: Duration::from_secs(backoff_seconds),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Whether `result`, produced by the 1-based `attempt`, earns another try.
    pub fn should_retry(&self, attempt: u32, result: &ProbeResult) -> bool {
        if attempt >= self.max_attempts {
            return false;
        }
        if result.error.is_some() {
            return true;
        }
        matches!(result.status, Some(status) if status >= 500)
    }
}
