//! Cycle coordination.
//!
//! # Data Flow
//! ```text
//! sequence.rs (primary, post-load, remaining targets)
//!     → for each URL, in order:
//!         probe → result log → classify → streak → failure alert
//!                                                → latency alert
//!     → sleep interval (or stop after one cycle)
//! ```

pub mod cycle;
pub mod sequence;

pub use cycle::{Clock, Coordinator, CycleReport, SystemClock};
pub use sequence::build_sequence;
