//! Alerting subsystem.
//!
//! # Data Flow
//! ```text
//! streak / latency sample
//!     → policy.rs (edge trigger for failures, cooldown for latency)
//!     → message.rs (alert text)
//!     → notifier.rs (dispatch, skip when unconfigured)
//!     → telegram.rs (Bot API delivery)
//! ```
//!
//! # Design Decisions
//! - One alert per failure streak, never one per failed probe
//! - Delivery failures never affect the probing loop

pub mod message;
pub mod notifier;
pub mod policy;
pub mod telegram;

pub use message::AlertMessageBuilder;
pub use notifier::{AlertDispatcher, AlertKind, DispatchOutcome, Notifier};
pub use policy::{AlertPolicy, LatencyAlertLimiter, LATENCY_ALERT_COOLDOWN_SECONDS};
pub use telegram::TelegramNotifier;
