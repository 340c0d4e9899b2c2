//! Keep-alive pinger with deduplicated alerting.
//!
//! Periodically probes a list of HTTP endpoints, logs one JSON line per probe,
//! and alerts when an endpoint keeps failing or responds slowly.
//!
//! # Architecture Overview
//!
//! ```text
//!   config ──▶ lifecycle::startup ──▶ coordinator
//!                                         │
//!             ┌───────────────────────────┼──────────────────────────┐
//!             ▼                           ▼                          ▼
//!        probe + resilience         health (classify,          alerting (policy,
//!        (GET, retry, backoff)       failure streaks)           telegram notifier)
//!             │                           │                          │
//!             └──────────────▶ observability (stdout JSON, tracing, metrics)
//! ```

// Core pipeline
pub mod alerting;
pub mod coordinator;
pub mod health;
pub mod probe;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::KeepAliveConfig;
pub use coordinator::{Coordinator, CycleReport};
pub use lifecycle::Shutdown;
