//! Health evaluation subsystem.
//!
//! # Data Flow
//! ```text
//! ProbeResult
//!     → classifier.rs (success / warning-only / hard failure)
//!     → streak.rs (consecutive failures per URL)
//! ```
//!
//! # Design Decisions
//! - A missing health endpoint (404) is a warning, not an outage
//! - Any non-failure resets the streak, warnings included
//! - State is per URL and lives as long as the process

pub mod classifier;
pub mod streak;

pub use classifier::{Outcome, OutcomeClassifier};
pub use streak::FailureStreakTracker;
