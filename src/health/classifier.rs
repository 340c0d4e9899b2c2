//! Probe outcome classification.
//!
//! # Rules (first match wins)
//! 1. `ok` → success
//! 2. 404 on a known health-check path → warning only
//! 3. anything else → hard failure

use url::Url;

use crate::probe::ProbeResult;

/// Health-check paths whose absence is not an outage.
pub const DEFAULT_HEALTH_PATHS: &[&str] = &["/health", "/api/health"];

/// Verdict for one probe. Never both a failure and a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub is_failure: bool,
    pub is_warning_only: bool,
}

impl Outcome {
    pub const SUCCESS: Outcome = Outcome {
        is_failure: false,
        is_warning_only: false,
    };
    pub const WARNING: Outcome = Outcome {
        is_failure: false,
        is_warning_only: true,
    };
    pub const FAILURE: Outcome = Outcome {
        is_failure: true,
        is_warning_only: false,
    };

    /// Metric label.
    pub fn label(&self) -> &'static str {
        if self.is_failure {
            "failure"
        } else if self.is_warning_only {
            "warning"
        } else {
            "success"
        }
    }
}

/// Turns a [`ProbeResult`] into an [`Outcome`].
#[derive(Debug, Clone)]
pub struct OutcomeClassifier {
    health_paths: Vec<String>,
}

impl Default for OutcomeClassifier {
    fn default() -> Self {
        Self::with_paths(DEFAULT_HEALTH_PATHS.iter().copied())
    }
}

impl OutcomeClassifier {
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            health_paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classify(&self, url: &str, result: &ProbeResult) -> Outcome {
        if result.ok {
            return Outcome::SUCCESS;
        }
        if result.status == Some(404) && self.is_health_endpoint(url) {
            return Outcome::WARNING;
        }
        Outcome::FAILURE
    }

    /// Path match ignores the query, a trailing slash, and treats "" as "/".
    pub fn is_health_endpoint(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let trimmed = parsed.path().trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        self.health_paths.iter().any(|path| path == normalized)
    }
}
