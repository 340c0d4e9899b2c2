//! Single-endpoint prober with bounded retries.
//!
//! # Responsibilities
//! - Issue a GET with a browser user agent and a per-attempt timeout
//! - Measure latency of every attempt, successful or not
//! - Retry transport errors and 5xx with a constant backoff

use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::observability::metrics;
use crate::probe::result::ProbeResult;
use crate::probe::transport::{HttpTransport, ReqwestTransport, TransportError};
use crate::resilience::{RetryPolicy, Sleeper, TokioSleeper};

/// Desktop Chrome user agent. Some CDNs reject unknown clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Something that can check one URL.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// Probes URLs over HTTP according to a [`RetryPolicy`].
pub struct Prober<T = ReqwestTransport, S = TokioSleeper> {
    transport: T,
    sleeper: S,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl Prober {
    /// Production prober backed by `reqwest` and the tokio timer.
    pub fn http(timeout_seconds: u64, retry_policy: RetryPolicy) -> Result<Self, TransportError> {
        Ok(Self::new(
            ReqwestTransport::new()?,
            TokioSleeper,
            timeout_seconds,
            retry_policy,
        ))
    }
}

impl<T: HttpTransport, S: Sleeper> Prober<T, S> {
    pub fn new(transport: T, sleeper: S, timeout_seconds: u64, retry_policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            timeout: Duration::from_secs(timeout_seconds.max(1)),
            retry_policy,
        }
    }

    async fn attempt(&self, url: &str) -> ProbeResult {
        let start = Instant::now();
        let outcome = self.transport.get(url, BROWSER_USER_AGENT, self.timeout).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        metrics::record_attempt();

        match outcome {
            Ok(status) => ProbeResult::from_status(status, latency_ms),
            Err(e) => ProbeResult::from_error(e.to_string(), latency_ms),
        }
    }
}

#[async_trait]
impl<T: HttpTransport, S: Sleeper> Probe for Prober<T, S> {
    async fn probe(&self, url: &str) -> ProbeResult {
        let max_attempts = self.retry_policy.max_attempts();

        for attempt in 1..=max_attempts {
            let result = self.attempt(url).await;
            if !self.retry_policy.should_retry(attempt, &result) {
                return result;
            }

            tracing::debug!(
                url = %url,
                attempt,
                max_attempts,
                status = ?result.status,
                error = ?result.error,
                "Probe attempt failed, retrying"
            );
            self.sleeper.sleep(self.retry_policy.backoff()).await;
        }

        ProbeResult::unknown()
    }
}
