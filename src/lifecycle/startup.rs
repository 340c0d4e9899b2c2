//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the HTTP prober and the notifier from the resolved configuration
//! - Wire them into a [`Coordinator`] with fresh per-URL state
//!
//! # Design Decisions
//! - Fail fast: a client that cannot be built is fatal
//! - Nothing is probed here

use std::sync::Arc;
use thiserror::Error;

use crate::alerting::{
    AlertDispatcher, AlertPolicy, LatencyAlertLimiter, Notifier, TelegramNotifier,
};
use crate::config::KeepAliveConfig;
use crate::coordinator::{build_sequence, Coordinator};
use crate::probe::{Prober, TransportError};
use crate::resilience::RetryPolicy;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build probe client: {0}")]
    Prober(#[from] TransportError),

    #[error("failed to build notifier client: {0}")]
    Notifier(#[from] reqwest::Error),
}

/// Build a ready-to-run coordinator.
pub fn build_coordinator(config: &KeepAliveConfig) -> Result<Coordinator, StartupError> {
    let retry_policy = RetryPolicy::new(config.retries, config.backoff_seconds);
    let prober = Prober::http(config.timeout_seconds, retry_policy)?;

    let notifier = TelegramNotifier::new(
        config.telegram_bot_token.clone(),
        config.telegram_chat_id.clone(),
    )?;
    if !notifier.is_configured() {
        tracing::warn!("Telegram credentials missing, alerts will be logged but not sent");
    }

    let policy = AlertPolicy::new(
        config.alert_consecutive_failures,
        config.alert_latency_ms,
        LatencyAlertLimiter::default(),
    );

    let urls = build_sequence(&config.target_urls, &config.post_load_urls);
    tracing::info!(
        urls = ?urls,
        max_attempts = retry_policy.max_attempts(),
        timeout_secs = config.timeout_seconds,
        "Coordinator ready"
    );

    Ok(Coordinator::new(
        urls,
        Box::new(prober),
        policy,
        AlertDispatcher::new(Arc::new(notifier)),
        config.interval_seconds,
    ))
}
