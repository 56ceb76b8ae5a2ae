//! Container liveness probe.
//!
//! Issues a single bounded HTTP GET against a target URL and reports the
//! outcome through the process exit code:
//!
//! ```text
//! 0  response received with status in [200, 400)
//! 1  transport failure (no response obtained)
//! 2  response received with status outside [200, 400)
//! ```
//!
//! Intended to be wired into a container runtime's health-check hook. The
//! supervisor re-invokes the probe on its own schedule, so nothing is
//! retried here.

use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthprobe::cli::Cli;
use healthprobe::probe::{exit_code, probe, ProbeOutcome};

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the OK contract line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthprobe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = probe(cli.into_config()).await;

    match &result {
        Ok(ProbeOutcome::Healthy(status)) => println!("OK {}", status),
        Ok(ProbeOutcome::Unhealthy(status)) => eprintln!("non-ok status: {}", status),
        Err(err) => eprintln!("healthcheck error: {}", err),
    }

    process::exit(exit_code(&result));
}
