//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Coordinator produces:
//!     → logging.rs (probe records on stdout, diagnostics on stderr)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Probe records have a fixed JSON shape independent of the log format
//! - Metrics are cheap and disabled unless an address is configured

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, ProbeRecord, ResultLog};
