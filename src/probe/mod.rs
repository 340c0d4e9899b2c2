//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! url
//!     → prober.rs (attempt loop, latency timing)
//!     → transport.rs (one GET with timeout)
//!     → resilience (retry decision, backoff)
//!     → ProbeResult (result.rs)
//! ```
//!
//! # Design Decisions
//! - Failures are values: a probe never returns an error to the caller
//! - Latency is reported for failed attempts too

pub mod prober;
pub mod result;
pub mod transport;

pub use prober::{Probe, Prober, BROWSER_USER_AGENT};
pub use result::ProbeResult;
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
