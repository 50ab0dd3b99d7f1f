use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::models::ResumeFixture;
use crate::prober::DEFAULT_URL;

/// Smoke test for a resume parsing service: builds a sample resume PDF,
/// uploads it and prints what the service extracted.
///
/// Every flag with an env var can also be set from `.env`.
#[derive(Debug, Clone, Parser)]
#[command(name = "parse-probe", version)]
pub struct Config {
    /// Parsing endpoint receiving the multipart upload.
    #[arg(long, env = "PARSE_PDF_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Request timeout. Unset means wait forever.
    #[arg(long, env = "PARSE_PDF_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// JSON file overriding the built-in resume content.
    #[arg(long, env = "RESUME_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Write the PDF here instead of a temp file. The file is kept.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Build the PDF and stop before uploading.
    #[arg(long)]
    pub build_only: bool,

    /// Exit non-zero when the service answers with anything but 200.
    #[arg(long)]
    pub strict: bool,

    /// Log level for this crate when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Parses the command line after loading `.env` (ignored if missing).
    /// Exits the process with usage on invalid arguments.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Config::parse()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn resume_fixture(&self) -> Result<ResumeFixture> {
        match &self.fixture {
            Some(path) => ResumeFixture::from_json_file(path)
                .with_context(|| format!("Failed to load fixture '{}'", path.display())),
            None => Ok(ResumeFixture::default()),
        }
    }
}
