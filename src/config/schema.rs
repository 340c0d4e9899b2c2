//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the keep-alive
//! pinger. All types derive Serde traits so the same struct can be read from a
//! TOML file and printed back (masked) as JSON.

use serde::{Deserialize, Serialize};

/// Minimum accepted values for the numeric settings.
pub mod minimums {
    pub const INTERVAL_SECONDS: u64 = 1;
    pub const TIMEOUT_SECONDS: u64 = 1;
    pub const RETRIES: u32 = 0;
    pub const BACKOFF_SECONDS: u64 = 0;
    pub const ALERT_CONSECUTIVE_FAILURES: u32 = 1;
    pub const ALERT_LATENCY_MS: u64 = 0;
}

/// Root configuration for the keep-alive pinger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeepAliveConfig {
    /// Endpoints probed every cycle. The first one is the primary target.
    pub target_urls: Vec<String>,

    /// Deep checks probed right after the primary target.
    pub post_load_urls: Vec<String>,

    /// Pause between two cycles, in seconds.
    pub interval_seconds: u64,

    /// Per-attempt request timeout, in seconds.
    pub timeout_seconds: u64,

    /// Extra attempts after the first one.
    pub retries: u32,

    /// Constant pause between attempts, in seconds.
    pub backoff_seconds: u64,

    /// Consecutive failures that raise a failure alert.
    pub alert_consecutive_failures: u32,

    /// Latency at or above which a latency alert is considered.
    pub alert_latency_ms: u64,

    /// Telegram bot token (secret).
    pub telegram_bot_token: Option<String>,

    /// Telegram chat receiving alerts.
    pub telegram_chat_id: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Diagnostic log format: "pretty" or "json".
    pub log_format: LogFormat,

    /// Prometheus exporter bind address. Disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            target_urls: vec![
                "https://www.parlaygorilla.com/".to_string(),
                "https://api.parlaygorilla.com/health".to_string(),
            ],
            post_load_urls: vec!["https://api.parlaygorilla.com/health?deep=1".to_string()],
            interval_seconds: 600,
            timeout_seconds: 15,
            retries: 2,
            backoff_seconds: 3,
            alert_consecutive_failures: 3,
            alert_latency_ms: 4000,
            telegram_bot_token: None,
            telegram_chat_id: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_address: None,
        }
    }
}

/// Diagnostic log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

impl KeepAliveConfig {
    /// Secret-masked view used by `--print-config`.
    pub fn to_safe_view(&self) -> SafeConfigView {
        SafeConfigView {
            target_urls: self.target_urls.clone(),
            post_load_urls: self.post_load_urls.clone(),
            interval_seconds: self.interval_seconds,
            timeout_seconds: self.timeout_seconds,
            retries: self.retries,
            backoff_seconds: self.backoff_seconds,
            alert_consecutive_failures: self.alert_consecutive_failures,
            alert_latency_ms: self.alert_latency_ms,
            telegram_bot_token: mask_token(self.telegram_bot_token.as_deref()),
            telegram_chat_id: self.telegram_chat_id.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            metrics_address: self.metrics_address.clone(),
        }
    }
}

/// Printable configuration with secrets masked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SafeConfigView {
    pub target_urls: Vec<String>,
    pub post_load_urls: Vec<String>,
    pub interval_seconds: u64,
    pub timeout_seconds: u64,
    pub retries: u32,
    pub backoff_seconds: u64,
    pub alert_consecutive_failures: u32,
    pub alert_latency_ms: u64,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics_address: Option<String>,
}

/// Mask a secret for display.
///
/// Short tokens are fully starred; longer ones keep three characters on
/// each side.
pub fn mask_token(token: Option<&str>) -> Option<String> {
    let token = token.filter(|t| !t.is_empty())?;
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 6 {
        return Some("*".repeat(chars.len()));
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    Some(format!("{}...{}", head, tail))
}
