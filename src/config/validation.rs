//! Configuration validation.
//!
//! # Responsibilities
//! - Reset out-of-range values to their defaults
//! - Flag URLs that do not parse or appear more than once
//!
//! # Design Decisions
//! - Never fatal: every issue is reported, the process keeps running
//! - Returns all issues, not just the first

use std::collections::HashSet;
use thiserror::Error;
use url::Url;

use crate::config::schema::{minimums, KeepAliveConfig};

/// A non-fatal configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("{field} = {value} is below the minimum {min}, using default {default}")]
    BelowMinimum {
        field: &'static str,
        value: i64,
        min: i64,
        default: i64,
    },

    #[error("{field} = {value} is not a valid integer, using default {default}")]
    InvalidValue {
        field: &'static str,
        value: String,
        default: i64,
    },

    #[error("'{0}' is not a valid URL")]
    InvalidUrl(String),

    #[error("'{0}' is listed more than once")]
    DuplicateUrl(String),

    #[error("no target or post-load URLs configured")]
    NoUrls,
}

/// Validate a configuration in place.
///
/// Numeric settings below their minimum are reset to the default value.
/// URL problems are only reported.
pub fn validate_config(config: &mut KeepAliveConfig) -> Vec<ValidationIssue> {
    let defaults = KeepAliveConfig::default();
    let mut issues = Vec::new();

    clamp(
        &mut config.interval_seconds,
        minimums::INTERVAL_SECONDS,
        defaults.interval_seconds,
        "interval_seconds",
        &mut issues,
    );
    clamp(
        &mut config.timeout_seconds,
        minimums::TIMEOUT_SECONDS,
        defaults.timeout_seconds,
        "timeout_seconds",
        &mut issues,
    );
    if config.alert_consecutive_failures < minimums::ALERT_CONSECUTIVE_FAILURES {
        issues.push(ValidationIssue::BelowMinimum {
            field: "alert_consecutive_failures",
            value: config.alert_consecutive_failures as i64,
            min: minimums::ALERT_CONSECUTIVE_FAILURES as i64,
            default: defaults.alert_consecutive_failures as i64,
        });
        config.alert_consecutive_failures = defaults.alert_consecutive_failures;
    }

    if config.target_urls.is_empty() && config.post_load_urls.is_empty() {
        issues.push(ValidationIssue::NoUrls);
    }

    let mut seen = HashSet::new();
    for url in config.target_urls.iter().chain(config.post_load_urls.iter()) {
        if Url::parse(url).is_err() {
            issues.push(ValidationIssue::InvalidUrl(url.clone()));
        }
        if !seen.insert(url.as_str()) {
            issues.push(ValidationIssue::DuplicateUrl(url.clone()));
        }
    }

    issues
}

fn clamp(
    value: &mut u64,
    min: u64,
    default: u64,
    field: &'static str,
    issues: &mut Vec<ValidationIssue>,
) {
    if *value < min {
        issues.push(ValidationIssue::BelowMinimum {
            field,
            value: *value as i64,
            min: min as i64,
            default: default as i64,
        });
        *value = default;
    }
}
