use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use keepalive::config::load_config;
use keepalive::lifecycle::{build_coordinator, shutdown_on_signal, Shutdown};
use keepalive::observability::{init_tracing, metrics};

const EXIT_CYCLE_FAILED: u8 = 1;
const EXIT_STARTUP_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "keepalive")]
#[command(about = "Keep-alive pinger with failure and latency alerts", long_about = None)]
struct Cli {
    /// Run one ping cycle then exit (1 if any endpoint failed).
    #[arg(long)]
    once: bool,

    /// Print the resolved, secret-masked config and exit.
    #[arg(long)]
    print_config: bool,

    /// Optional TOML config file; environment variables override it.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("keepalive: {}", e);
            return ExitCode::from(EXIT_STARTUP_FAILED);
        }
    };
    let config = loaded.config;

    if cli.print_config {
        return match serde_json::to_string_pretty(&config.to_safe_view()) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("keepalive: {}", e);
                ExitCode::from(EXIT_STARTUP_FAILED)
            }
        };
    }

    init_tracing(&config.log_level, config.log_format);
    tracing::info!("keepalive v{} starting", env!("CARGO_PKG_VERSION"));
    for issue in &loaded.issues {
        tracing::warn!(%issue, "Configuration issue");
    }

    if let Some(address) = &config.metrics_address {
        match address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let mut coordinator = match build_coordinator(&config) {
        Ok(coordinator) => coordinator,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::from(EXIT_STARTUP_FAILED);
        }
    };

    if cli.once {
        let report = coordinator.run_once().await;
        return if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(EXIT_CYCLE_FAILED)
        };
    }

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    coordinator.run(receiver).await;

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
