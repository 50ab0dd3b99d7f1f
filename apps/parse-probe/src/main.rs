mod builder;
mod config;
mod errors;
mod models;
mod prober;
mod report;
mod runner;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Exits with usage on bad arguments
    let config = Config::load();

    // Diagnostics go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting parse-probe v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout();
    let report = runner::run(&config, &mut stdout).await?;
    match report.kept_path() {
        Some(path) => info!("Finished {:?}, PDF kept at {}", report.status, path.display()),
        None => info!("Finished {:?}", report.status),
    }

    Ok(report.status.exit_code(config.strict))
}
