//! Alert message text.

use crate::probe::ProbeResult;

/// Formats human-readable alert messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertMessageBuilder;

impl AlertMessageBuilder {
    pub fn failure(&self, url: &str, streak: u32, result: &ProbeResult) -> String {
        let status = match result.status {
            Some(code) => code.to_string(),
            None => "none".to_string(),
        };
        let mut message = format!(
            "Keepalive alert: {} failed {} times in a row (status={}).",
            url, streak, status
        );
        if let Some(error) = result.error.as_deref().filter(|e| !e.is_empty()) {
            message.push_str(" error=");
            message.push_str(error);
        }
        message
    }

    pub fn latency(&self, url: &str, latency_ms: u64, threshold_ms: u64) -> String {
        format!(
            "Keepalive alert: {} latency {}ms >= {}ms.",
            url, latency_ms, threshold_ms
        )
    }
}
