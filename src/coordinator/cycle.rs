//! Probe cycle driver.
//!
//! # States
//! ```text
//! Idle → Running-Cycle → Sleeping → Running-Cycle → ...
//!                      ↘ Terminated (single-cycle mode or shutdown)
//! ```
//!
//! # Design Decisions
//! - URLs are visited strictly in sequence; one bad endpoint never aborts a cycle
//! - All per-URL state is owned here, so two coordinators never share it
//! - Latency alerts use the current probe even when it failed

use chrono::Utc;
use std::time::Duration;
use tokio::sync::broadcast;

use crate::alerting::{AlertDispatcher, AlertKind, AlertMessageBuilder, AlertPolicy};
use crate::health::{FailureStreakTracker, Outcome, OutcomeClassifier};
use crate::observability::{metrics, ResultLog};
use crate::probe::{Probe, ProbeResult};

/// Wall-clock source for the latency cooldown.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Summary of one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub probed: usize,
    pub failures: usize,
    pub warnings: usize,
    pub alerts_triggered: usize,
}

impl CycleReport {
    /// Warnings do not count against a cycle.
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// Runs probe cycles and raises alerts.
pub struct Coordinator {
    urls: Vec<String>,
    prober: Box<dyn Probe>,
    classifier: OutcomeClassifier,
    streaks: FailureStreakTracker,
    policy: AlertPolicy,
    dispatcher: AlertDispatcher,
    messages: AlertMessageBuilder,
    results: ResultLog,
    clock: Box<dyn Clock>,
    interval: Duration,
}

impl Coordinator {
    pub fn new(
        urls: Vec<String>,
        prober: Box<dyn Probe>,
        policy: AlertPolicy,
        dispatcher: AlertDispatcher,
        interval_seconds: u64,
    ) -> Self {
        Self {
            urls,
            prober,
            classifier: OutcomeClassifier::default(),
            streaks: FailureStreakTracker::new(),
            policy,
            dispatcher,
            messages: AlertMessageBuilder,
            results: ResultLog::stdout(),
            clock: Box::new(SystemClock),
            interval: Duration::from_secs(interval_seconds.max(1)),
        }
    }

    pub fn with_result_log(mut self, results: ResultLog) -> Self {
        self.results = results;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_classifier(mut self, classifier: OutcomeClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn streak(&self, url: &str) -> u32 {
        self.streaks.current(url)
    }

    /// Probe every URL once.
    pub async fn run_once(&mut self) -> CycleReport {
        let mut report = CycleReport::default();
        let urls = self.urls.clone();

        for url in &urls {
            self.check_url(url, &mut report).await;
        }

        metrics::record_cycle(report.is_success());
        tracing::info!(
            probed = report.probed,
            failures = report.failures,
            warnings = report.warnings,
            alerts = report.alerts_triggered,
            "Cycle complete"
        );
        report
    }

    /// Cycle until `shutdown` fires, sleeping `interval` between cycles.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            urls = self.urls.len(),
            interval_secs = self.interval.as_secs(),
            "Keep-alive loop starting"
        );

        loop {
            tokio::select! {
                _ = self.run_once() => {}
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown during cycle, exiting loop");
                    break;
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown while sleeping, exiting loop");
                    break;
                }
            }
        }
    }

    async fn check_url(&mut self, url: &str, report: &mut CycleReport) {
        let result = self.prober.probe(url).await;
        self.results.log_result(url, &result);

        let outcome = self.classifier.classify(url, &result);
        metrics::record_probe(outcome.label(), result.latency_ms);

        report.probed += 1;
        if outcome.is_failure {
            report.failures += 1;
        } else if outcome.is_warning_only {
            report.warnings += 1;
            tracing::warn!(url = %url, status = ?result.status, "Health endpoint missing, treating as warning");
        }

        let streak = self.streaks.record(url, outcome.is_failure);
        metrics::record_streak(url, streak);

        if self.handle_failure_alert(url, &result, outcome, streak).await {
            report.alerts_triggered += 1;
        }
        if self.handle_latency_alert(url, &result).await {
            report.alerts_triggered += 1;
        }
    }

    async fn handle_failure_alert(
        &mut self,
        url: &str,
        result: &ProbeResult,
        outcome: Outcome,
        streak: u32,
    ) -> bool {
        if !outcome.is_failure || !self.policy.should_alert_failure(streak) {
            return false;
        }
        let message = self.messages.failure(url, streak, result);
        self.dispatcher.dispatch(AlertKind::Failure, &message).await;
        true
    }

    async fn handle_latency_alert(&mut self, url: &str, result: &ProbeResult) -> bool {
        let now = self.clock.now_epoch_seconds();
        if !self.policy.should_alert_latency(url, result.latency_ms, now) {
            return false;
        }
        let message = self
            .messages
            .latency(url, result.latency_ms, self.policy.latency_threshold_ms());
        self.dispatcher.dispatch(AlertKind::Latency, &message).await;
        true
    }
}
