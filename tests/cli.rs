//! Command-line contract: exit codes and `--print-config` output.

use serde_json::Value;
use std::process::Output;
use tokio::process::Command;

mod common;

/// Run the binary with only the given environment.
async fn keepalive(args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keepalive"))
        .args(args)
        .env_clear()
        .env("RETRIES", "0")
        .env("BACKOFF_SECONDS", "0")
        .env("TIMEOUT_SECONDS", "2")
        .envs(env.iter().copied())
        .output()
        .await
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_once_exits_zero_when_nothing_hard_fails() {
    let healthy = common::start_mock_backend(200).await;
    let missing_health = common::start_mock_backend(404).await;
    let targets = format!("{},{}", healthy.url("/"), missing_health.url("/health"));
    let post_load = healthy.url("/health?deep=1");

    let output = keepalive(
        &["--once"],
        &[("TARGET_URLS", targets.as_str()), ("POST_LOAD_URLS", post_load.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let records = stdout_lines(&output);
    assert_eq!(records.len(), 3);
    assert_eq!(records[1]["url"], post_load);
    assert_eq!(records[2]["status"], 404);
}

#[tokio::test]
async fn test_once_exits_one_when_a_url_fails() {
    let healthy = common::start_mock_backend(200).await;
    let down = common::start_mock_backend(500).await;
    let targets = format!("{},{}", healthy.url("/"), down.url("/"));
    let post_load = healthy.url("/health");

    let output = keepalive(
        &["--once"],
        &[("TARGET_URLS", targets.as_str()), ("POST_LOAD_URLS", post_load.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output).len(), 3);
    assert_eq!(down.request_count(), 1);
}

#[tokio::test]
async fn test_print_config_masks_token_and_skips_probing() {
    let backend = common::start_mock_backend(200).await;
    let target = backend.url("/");
    let post_load = backend.url("/health");

    let output = keepalive(
        &["--print-config", "--once"],
        &[
            ("TARGET_URLS", target.as_str()),
            ("POST_LOAD_URLS", post_load.as_str()),
            ("TELEGRAM_BOT_TOKEN", "123456:secret-token"),
            ("TELEGRAM_CHAT_ID", "-10042"),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("secret-token"));

    let printed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(printed["TARGET_URLS"], serde_json::json!([target]));
    assert_eq!(printed["TELEGRAM_BOT_TOKEN"], "123...ken");
    assert_eq!(printed["TELEGRAM_CHAT_ID"], "-10042");
    assert_eq!(printed["RETRIES"], 0);
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn test_unreadable_config_file_exits_two() {
    let output = keepalive(
        &["--once", "--config", "/definitely/not/here.toml"],
        &[],
    )
    .await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_negative_file_value_falls_back_instead_of_exiting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keepalive.toml");
    std::fs::write(&path, "interval_seconds = -5\nalert_latency_ms = 2500\n").unwrap();

    let output = keepalive(
        &["--print-config", "--config", path.to_str().unwrap()],
        &[],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["INTERVAL_SECONDS"], 600);
    assert_eq!(printed["ALERT_LATENCY_MS"], 2500);
}
