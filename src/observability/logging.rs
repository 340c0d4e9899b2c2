//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the diagnostic subscriber (stderr)
//! - Emit one JSON line per probe result (stdout)
//!
//! # Design Decisions
//! - stdout carries only probe records so it can be piped into a log shipper
//! - Each record is flushed immediately
//! - Log level configurable via config and `RUST_LOG`

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::probe::ProbeResult;

/// Install the global tracing subscriber.
pub fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("keepalive={}", log_level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
}

/// One line of probe output.
#[derive(Debug, Serialize)]
pub struct ProbeRecord<'a> {
    pub ts: String,
    pub url: &'a str,
    pub ok: bool,
    pub status: Option<u16>,
    pub latency_ms: u64,
    pub error: Option<&'a str>,
}

impl<'a> ProbeRecord<'a> {
    pub fn new(url: &'a str, result: &'a ProbeResult) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            url,
            ok: result.ok,
            status: result.status,
            latency_ms: result.latency_ms,
            error: result.error.as_deref(),
        }
    }
}

/// Append-only sink for probe records.
pub struct ResultLog {
    writer: Box<dyn Write + Send>,
}

impl ResultLog {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Write and flush one record. Write errors are reported, not raised.
    pub fn log_result(&mut self, url: &str, result: &ProbeResult) {
        let record = ProbeRecord::new(url, result);
        if let Err(e) = self.write_line(&record) {
            tracing::warn!(url = %url, error = %e, "Failed to write probe record");
        }
    }

    fn write_line(&mut self, record: &ProbeRecord<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
