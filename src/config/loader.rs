//! Configuration loading from disk and the environment.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::config::schema::{minimums, KeepAliveConfig};
use crate::config::validation::{validate_config, ValidationIssue};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A loaded configuration and the issues found while validating it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: KeepAliveConfig,
    pub issues: Vec<ValidationIssue>,
}

/// Load the configuration from every source.
///
/// Precedence, lowest first: defaults, optional TOML file, `.env`, process
/// environment. Only an unreadable or unparsable TOML file is an error.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let (base, mut issues) = match path {
        Some(path) => {
            let loaded = load_file(path)?;
            (loaded.config, loaded.issues)
        }
        None => (KeepAliveConfig::default(), Vec::new()),
    };

    // A missing .env is the common case.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
        }
    }

    let environ: HashMap<String, String> = std::env::vars().collect();
    let mut config = apply_env(base, &EnvValueParser::new(&environ));
    issues.extend(validate_config(&mut config));

    Ok(LoadedConfig { config, issues })
}

/// Numeric keys with the range each accepts.
const NUMERIC_KEYS: [(&str, i64, i64); 6] = [
    ("interval_seconds", minimums::INTERVAL_SECONDS as i64, i64::MAX),
    ("timeout_seconds", minimums::TIMEOUT_SECONDS as i64, i64::MAX),
    ("retries", minimums::RETRIES as i64, u32::MAX as i64),
    ("backoff_seconds", minimums::BACKOFF_SECONDS as i64, i64::MAX),
    (
        "alert_consecutive_failures",
        minimums::ALERT_CONSECUTIVE_FAILURES as i64,
        u32::MAX as i64,
    ),
    ("alert_latency_ms", minimums::ALERT_LATENCY_MS as i64, i64::MAX),
];

/// Read a TOML configuration file. Missing keys take their defaults.
///
/// A numeric value that is not an integer, or is below its minimum, is
/// dropped so the default applies, and reported as an issue. Only an
/// unreadable file or invalid TOML is an error.
pub fn load_file(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut table: toml::Table = toml::from_str(&content)?;
    let issues = reset_numeric_values(&mut table);
    let config = toml::Value::Table(table).try_into()?;
    Ok(LoadedConfig { config, issues })
}

fn reset_numeric_values(table: &mut toml::Table) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (field, min, max) in NUMERIC_KEYS {
        let Some(value) = table.get(field) else {
            continue;
        };
        let issue = match value.as_integer() {
            Some(n) if (min..=max).contains(&n) => continue,
            Some(n) if n < min => ValidationIssue::BelowMinimum {
                field,
                value: n,
                min,
                default: default_for(field),
            },
            _ => ValidationIssue::InvalidValue {
                field,
                value: value.to_string(),
                default: default_for(field),
            },
        };
        table.remove(field);
        issues.push(issue);
    }
    issues
}

fn default_for(field: &str) -> i64 {
    let defaults = KeepAliveConfig::default();
    let value = match field {
        "interval_seconds" => defaults.interval_seconds,
        "timeout_seconds" => defaults.timeout_seconds,
        "retries" => defaults.retries as u64,
        "backoff_seconds" => defaults.backoff_seconds,
        "alert_consecutive_failures" => defaults.alert_consecutive_failures as u64,
        _ => defaults.alert_latency_ms,
    };
    value as i64
}

/// Overlay environment variables onto a base configuration.
///
/// Malformed or out-of-range values keep the base value.
pub fn apply_env(base: KeepAliveConfig, env: &EnvValueParser<'_>) -> KeepAliveConfig {
    KeepAliveConfig {
        target_urls: env.get_list("TARGET_URLS", &base.target_urls),
        post_load_urls: env.get_list("POST_LOAD_URLS", &base.post_load_urls),
        interval_seconds: env.get_int(
            "INTERVAL_SECONDS",
            base.interval_seconds,
            minimums::INTERVAL_SECONDS,
        ),
        timeout_seconds: env.get_int(
            "TIMEOUT_SECONDS",
            base.timeout_seconds,
            minimums::TIMEOUT_SECONDS,
        ),
        retries: env.get_int("RETRIES", base.retries, minimums::RETRIES),
        backoff_seconds: env.get_int(
            "BACKOFF_SECONDS",
            base.backoff_seconds,
            minimums::BACKOFF_SECONDS,
        ),
        alert_consecutive_failures: env.get_int(
            "ALERT_CONSECUTIVE_FAILURES",
            base.alert_consecutive_failures,
            minimums::ALERT_CONSECUTIVE_FAILURES,
        ),
        alert_latency_ms: env.get_int(
            "ALERT_LATENCY_MS",
            base.alert_latency_ms,
            minimums::ALERT_LATENCY_MS,
        ),
        telegram_bot_token: env.get_str("TELEGRAM_BOT_TOKEN").or(base.telegram_bot_token),
        telegram_chat_id: env.get_str("TELEGRAM_CHAT_ID").or(base.telegram_chat_id),
        log_level: env.get_str("LOG_LEVEL").unwrap_or(base.log_level),
        log_format: env
            .get_str("LOG_FORMAT")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(base.log_format),
        metrics_address: env.get_str("METRICS_ADDRESS").or(base.metrics_address),
    }
}

/// Typed access to raw environment values.
pub struct EnvValueParser<'a> {
    environ: &'a HashMap<String, String>,
}

impl<'a> EnvValueParser<'a> {
    pub fn new(environ: &'a HashMap<String, String>) -> Self {
        Self { environ }
    }

    /// Comma-separated list. Falls back when unset or when no item survives trimming.
    pub fn get_list(&self, key: &str, default: &[String]) -> Vec<String> {
        let Some(raw) = self.raw(key) else {
            return default.to_vec();
        };
        let items: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        if items.is_empty() {
            default.to_vec()
        } else {
            items
        }
    }

    /// Integer with a lower bound. Falls back when unset, malformed, or too small.
    pub fn get_int<T>(&self, key: &str, default: T, min: T) -> T
    where
        T: FromStr + PartialOrd,
    {
        match self.raw(key).map(str::parse::<T>) {
            Some(Ok(parsed)) if parsed >= min => parsed,
            _ => default,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<String> {
        self.raw(key).map(str::to_string)
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.environ
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}
