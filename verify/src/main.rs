// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::{Context, Result};
use q15_axpy::harness::{execute, HarnessConfig, Outcome};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "q15_axpy=info,q15_verify=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<Outcome> {
    let cfg = HarnessConfig::default();
    tracing::debug!("Q15 AXPY self-test with config: {:?}", cfg);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = execute(&cfg, &mut out).context("Failed to write self-test report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(outcome)
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(outcome) => ExitCode::from(outcome.code()),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}
