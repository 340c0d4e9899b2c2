//! Normalized probe outcome.

use serde::Serialize;

/// Outcome of the terminal attempt of one probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Transport succeeded and the status is 2xx or 3xx.
    pub ok: bool,
    /// Status code, absent on transport errors.
    pub status: Option<u16>,
    /// Wall-clock time of the attempt, measured even when it failed.
    pub latency_ms: u64,
    /// Transport error text.
    pub error: Option<String>,
}

impl ProbeResult {
    /// A response was received.
    pub fn from_status(status: u16, latency_ms: u64) -> Self {
        Self {
            ok: (200..400).contains(&status),
            status: Some(status),
            latency_ms,
            error: None,
        }
    }

    /// The request never produced a response.
    pub fn from_error(error: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            ok: false,
            status: None,
            latency_ms,
            error: Some(error.into()),
        }
    }

    /// Placeholder for a retry loop that ran out without a result.
    pub fn unknown() -> Self {
        Self::from_error("Unknown error", 0)
    }
}
