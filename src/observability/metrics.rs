//! Metrics collection and exposition.
//!
//! # Metrics
//! - `keepalive_probes_total` (counter): probes by outcome
//! - `keepalive_probe_attempts_total` (counter): HTTP attempts including retries
//! - `keepalive_probe_latency_ms` (histogram): latency of the terminal attempt
//! - `keepalive_failure_streak` (gauge): current streak per URL
//! - `keepalive_alerts_total` (counter): alerts handed to the notifier, by kind
//! - `keepalive_alert_delivery_failures_total` (counter)
//! - `keepalive_cycles_total` (counter): cycles by result
//!
//! Without an installed recorder every call is a no-op.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Start the Prometheus scrape endpoint. Failure is logged, not fatal.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter"),
    }
}

pub fn record_attempt() {
    ::metrics::counter!("keepalive_probe_attempts_total").increment(1);
}

pub fn record_probe(outcome: &'static str, latency_ms: u64) {
    ::metrics::counter!("keepalive_probes_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("keepalive_probe_latency_ms").record(latency_ms as f64);
}

pub fn record_streak(url: &str, streak: u32) {
    ::metrics::gauge!("keepalive_failure_streak", "url" => url.to_string()).set(streak as f64);
}

pub fn record_alert(kind: &'static str) {
    ::metrics::counter!("keepalive_alerts_total", "kind" => kind).increment(1);
}

pub fn record_delivery_failure() {
    ::metrics::counter!("keepalive_alert_delivery_failures_total").increment(1);
}

pub fn record_cycle(success: bool) {
    let result = if success { "success" } else { "failure" };
    ::metrics::counter!("keepalive_cycles_total", "result" => result).increment(1);
}
