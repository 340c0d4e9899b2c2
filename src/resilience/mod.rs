//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Probe attempt
//!     → retries.rs (is the result retryable? attempts left?)
//!     → backoff.rs (constant pause before the next attempt)
//! ```
//!
//! # Design Decisions
//! - Every attempt has a deadline (enforced by the transport)
//! - Only GET is ever issued, so every attempt is safe to repeat
//! - Pauses are awaited in place: endpoints are probed one at a time

pub mod backoff;
pub mod retries;

pub use backoff::{Sleeper, TokioSleeper};
pub use retries::RetryPolicy;
