//! Notification seam and dispatch.

use async_trait::async_trait;
use std::sync::Arc;

use crate::observability::metrics;

/// Outbound "send a text alert" capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Whether credentials are present.
    fn is_configured(&self) -> bool;

    /// Returns true when the message was accepted for delivery.
    async fn send_alert(&self, message: &str) -> bool;
}

/// Alert category, used for metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Failure,
    Latency,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Failure => "failure",
            AlertKind::Latency => "latency",
        }
    }
}

/// What happened to a dispatched alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No notifier credentials; nothing was sent.
    Skipped,
    Delivered,
    Failed,
}

/// Hands alert messages to a [`Notifier`].
///
/// Delivery failures are logged and swallowed.
#[derive(Clone)]
pub struct AlertDispatcher {
    notifier: Arc<dyn Notifier>,
}

impl AlertDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub async fn dispatch(&self, kind: AlertKind, message: &str) -> DispatchOutcome {
        if !self.notifier.is_configured() {
            tracing::info!(
                kind = kind.as_str(),
                alert = %message,
                "Notifier not configured, alert not sent"
            );
            return DispatchOutcome::Skipped;
        }

        metrics::record_alert(kind.as_str());

        if self.notifier.send_alert(message).await {
            tracing::info!(kind = kind.as_str(), "Alert sent");
            DispatchOutcome::Delivered
        } else {
            metrics::record_delivery_failure();
            tracing::error!(kind = kind.as_str(), "Alert failed to send");
            DispatchOutcome::Failed
        }
    }
}
